//! # asciisolid render
//!
//! The per-frame pipeline that turns a [`SurfaceCloud`] into a text [`Frame`]:
//!
//! rotate → project → (cull) → fit to window → resolve occlusion → shade → compose
//!
//! Each stage is exposed on its own so it can be tested and reused; the
//! [`Renderer`] chains them with a validated [`RenderConfig`].

pub mod projection;
pub mod raster;
pub mod occlusion;
pub mod shading;
pub mod frame;
pub mod renderer;

pub use projection::*;
pub use raster::*;
pub use occlusion::*;
pub use shading::*;
pub use frame::*;
pub use renderer::*;

pub use asciisolid_core::SurfaceCloud;
