//! Open cylinder (tube without caps)

use asciisolid_core::{
    linspace, validate_center, validate_positive, ParameterGrid, Point3d, Result,
    SurfaceGenerator, Vector3d,
};
use std::f64::consts::TAU;

/// A tube around the Z axis, `height` tall and centered on `center`.
///
/// `u` is the angle over `[0, 2π)`, `v` the height over `[-H/2, H/2]`. The
/// tube is hollow, so its inside is visible from some angles and it is never
/// back-face culled.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    radius: f64,
    height: f64,
    center: Vector3d,
    max_extent: f64,
}

impl Cylinder {
    pub fn new(radius: f64, height: f64, center: Vector3d) -> Result<Self> {
        validate_positive("cylinder radius", radius)?;
        validate_positive("cylinder height", height)?;
        validate_center(&center)?;

        Ok(Self {
            radius,
            height,
            center,
            max_extent: center.norm() + radius + height / 2.0,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl SurfaceGenerator for Cylinder {
    fn point(&self, theta: f64, h: f64) -> Point3d {
        let local = Vector3d::new(self.radius * theta.cos(), self.radius * theta.sin(), h);
        Point3d::from((local + self.center) / self.max_extent)
    }

    fn normal(&self, theta: f64, _h: f64) -> Vector3d {
        Vector3d::new(theta.cos(), theta.sin(), 0.0)
    }

    fn parameter_grid(&self, resolution: usize) -> ParameterGrid {
        let half = self.height / 2.0;
        ParameterGrid::new(
            linspace(0.0, TAU, resolution, false),
            linspace(-half, half, resolution, true),
        )
    }

    fn max_extent(&self) -> f64 {
        self.max_extent
    }

    fn is_single_sided(&self) -> bool {
        false
    }
}
