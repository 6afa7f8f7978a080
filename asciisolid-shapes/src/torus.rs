//! Ring torus

use asciisolid_core::{
    linspace, validate_center, validate_positive, ParameterGrid, Point3d, Result,
    SurfaceGenerator, Vector3d,
};
use std::f64::consts::TAU;

/// A torus lying in the XY plane around its center.
///
/// Parameters: `u` is the angle around the tube (theta), `v` the angle around
/// the ring (phi). Both are sampled over the closed range `[0, 2π]`, so the
/// seam samples appear twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Torus {
    /// Distance from the torus center to the tube center
    major_radius: f64,
    /// Radius of the tube
    minor_radius: f64,
    center: Vector3d,
    max_extent: f64,
}

impl Torus {
    pub fn new(major_radius: f64, minor_radius: f64, center: Vector3d) -> Result<Self> {
        validate_positive("torus major radius", major_radius)?;
        validate_positive("torus minor radius", minor_radius)?;
        validate_center(&center)?;

        Ok(Self {
            major_radius,
            minor_radius,
            center,
            max_extent: major_radius + minor_radius + center.norm(),
        })
    }

    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    pub fn center(&self) -> Vector3d {
        self.center
    }
}

impl SurfaceGenerator for Torus {
    fn point(&self, theta: f64, phi: f64) -> Point3d {
        let ring = self.major_radius + self.minor_radius * theta.cos();
        let local = Vector3d::new(
            ring * phi.cos(),
            ring * phi.sin(),
            self.minor_radius * theta.sin(),
        );
        Point3d::from((local + self.center) / self.max_extent)
    }

    fn normal(&self, theta: f64, phi: f64) -> Vector3d {
        Vector3d::new(
            theta.cos() * phi.cos(),
            theta.cos() * phi.sin(),
            theta.sin(),
        )
    }

    fn parameter_grid(&self, resolution: usize) -> ParameterGrid {
        let angles = linspace(0.0, TAU, resolution, true);
        ParameterGrid::new(angles.clone(), angles)
    }

    fn max_extent(&self) -> f64 {
        self.max_extent
    }
}
