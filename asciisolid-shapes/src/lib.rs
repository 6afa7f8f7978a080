//! # asciisolid shapes
//!
//! Parametric solids that produce co-indexed point clouds and unit normals.
//!
//! Every shape implements [`SurfaceGenerator`]: positions are offset by the
//! shape's center and scaled into the unit ball, normals are pure directions.
//! [`Solid`] wraps the concrete shapes so callers can pick one at runtime.

pub mod torus;
pub mod sphere;
pub mod cylinder;
pub mod cone;
pub mod solid;

pub use torus::*;
pub use sphere::*;
pub use cylinder::*;
pub use cone::*;
pub use solid::*;

pub use asciisolid_core::SurfaceGenerator;
