//! Right circular cone with a closed base

use asciisolid_core::{
    linspace, sample_grid, validate_center, validate_positive, validate_resolution,
    NormalPoint3d, ParameterGrid, Point3d, Result, SurfaceCloud, SurfaceGenerator, Vector3d,
};
use std::f64::consts::TAU;

/// A cone around the Z axis with its base at `-H/2` and apex at `+H/2`
/// (relative to `center`).
///
/// The lateral surface is parameterized by angle `u` over `[0, 2π)` and
/// height above the base `v` over `(0, H]`. The base is a separate disk fan
/// whose samples are appended after the lateral ones, all with normal
/// pointing straight down.
#[derive(Debug, Clone, PartialEq)]
pub struct Cone {
    /// Radius of the base
    radius: f64,
    height: f64,
    center: Vector3d,
    max_extent: f64,
    slant: f64,
}

impl Cone {
    pub fn new(radius: f64, height: f64, center: Vector3d) -> Result<Self> {
        validate_positive("cone radius", radius)?;
        validate_positive("cone height", height)?;
        validate_center(&center)?;

        Ok(Self {
            radius,
            height,
            center,
            max_extent: center.norm() + radius + height / 2.0,
            slant: radius.hypot(height),
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Base disk position at angle `theta` and distance `r` from the axis
    pub fn cap_point(&self, theta: f64, r: f64) -> Point3d {
        let local = Vector3d::new(r * theta.cos(), r * theta.sin(), -self.height / 2.0);
        Point3d::from((local + self.center) / self.max_extent)
    }

    /// Base disk sample axes: angle over `[0, 2π)`, radius over `[0, R]`
    pub fn cap_grid(&self, resolution: usize) -> ParameterGrid {
        ParameterGrid::new(
            linspace(0.0, TAU, resolution, false),
            linspace(0.0, self.radius, resolution, true),
        )
    }

    fn cap_cloud(&self, resolution: usize) -> SurfaceCloud {
        let down = -Vector3d::z();
        let samples: Vec<NormalPoint3d> = self
            .cap_grid(resolution)
            .pairs()
            .map(|(theta, r)| NormalPoint3d {
                position: self.cap_point(theta, r),
                normal: down,
            })
            .collect();
        SurfaceCloud::from_samples(&samples, true)
    }
}

impl SurfaceGenerator for Cone {
    fn point(&self, theta: f64, h: f64) -> Point3d {
        let r = (self.height - h) * self.radius / self.height;
        let local = Vector3d::new(r * theta.cos(), r * theta.sin(), h - self.height / 2.0);
        Point3d::from((local + self.center) / self.max_extent)
    }

    fn normal(&self, theta: f64, _h: f64) -> Vector3d {
        Vector3d::new(
            theta.cos() * self.height,
            theta.sin() * self.height,
            self.radius,
        ) / self.slant
    }

    fn parameter_grid(&self, resolution: usize) -> ParameterGrid {
        // The h = 0 ring coincides with the rim of the base, which the cap covers
        let heights = linspace(0.0, self.height, resolution, true)
            .into_iter()
            .skip(1)
            .collect();
        ParameterGrid::new(linspace(0.0, TAU, resolution, false), heights)
    }

    fn max_extent(&self) -> f64 {
        self.max_extent
    }

    fn generate(&self, resolution: usize) -> Result<SurfaceCloud> {
        validate_resolution(resolution)?;
        let lateral = sample_grid(self, &self.parameter_grid(resolution))?;
        Ok(lateral.concat(self.cap_cloud(resolution)))
    }
}
