//! Point types and related functionality

use nalgebra::{Point2, Point3, Unit, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A point in a projection plane's own 2D coordinates
pub type Point2d = Point2<f64>;

/// A unit-length direction (projection plane normal, light vector)
pub type Direction = Unit<Vector3d>;

/// A surface sample with its outward normal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalPoint3d {
    pub position: Point3d,
    pub normal: Vector3d,
}

impl Default for NormalPoint3d {
    fn default() -> Self {
        Self {
            position: Point3d::origin(),
            normal: Vector3d::new(0.0, 0.0, 1.0),
        }
    }
}

/// Normalize a raw direction vector.
///
/// Zero-length and non-finite vectors are rejected.
pub fn normalize_direction(vector: Vector3d) -> Result<Direction> {
    if !vector.iter().all(|c| c.is_finite()) {
        return Err(Error::InvalidDirection(format!(
            "direction ({}, {}, {}) has non-finite components",
            vector.x, vector.y, vector.z
        )));
    }

    Unit::try_new(vector, f64::EPSILON).ok_or_else(|| {
        Error::InvalidDirection(format!(
            "direction ({}, {}, {}) has zero length",
            vector.x, vector.y, vector.z
        ))
    })
}

/// Normalize a direction given as a plain component array
pub fn direction_from_array(components: [f64; 3]) -> Result<Direction> {
    normalize_direction(Vector3d::from(components))
}
