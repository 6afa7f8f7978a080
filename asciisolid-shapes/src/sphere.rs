//! Sphere

use asciisolid_core::{
    linspace, validate_center, validate_positive, ParameterGrid, Point3d, Result,
    SurfaceGenerator, Vector3d,
};
use std::f64::consts::{FRAC_PI_2, TAU};

/// A sphere sampled by longitude `u` over `[0, 2π)` and latitude `v` over
/// `[-π/2, π/2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    radius: f64,
    center: Vector3d,
    max_extent: f64,
}

impl Sphere {
    pub fn new(radius: f64, center: Vector3d) -> Result<Self> {
        validate_positive("sphere radius", radius)?;
        validate_center(&center)?;

        Ok(Self {
            radius,
            center,
            max_extent: radius + center.norm(),
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Vector3d {
        self.center
    }
}

impl SurfaceGenerator for Sphere {
    fn point(&self, theta: f64, phi: f64) -> Point3d {
        let local = self.normal(theta, phi) * self.radius;
        Point3d::from((local + self.center) / self.max_extent)
    }

    fn normal(&self, theta: f64, phi: f64) -> Vector3d {
        Vector3d::new(
            theta.cos() * phi.cos(),
            theta.sin() * phi.cos(),
            phi.sin(),
        )
    }

    fn parameter_grid(&self, resolution: usize) -> ParameterGrid {
        ParameterGrid::new(
            linspace(0.0, TAU, resolution, false),
            linspace(-FRAC_PI_2, FRAC_PI_2, resolution, true),
        )
    }

    fn max_extent(&self) -> f64 {
        self.max_extent
    }
}
