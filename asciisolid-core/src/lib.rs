//! Core data structures and traits for asciisolid
//! 
//! This crate provides the fundamental types shared by the rendering pipeline:
//! sample points, co-indexed normals, surface clouds, rigid transforms, and
//! the generator contract every parametric solid implements.

pub mod point;
pub mod point_cloud;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector3, Matrix3, Matrix4, Unit};
