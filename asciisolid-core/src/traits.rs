//! Core traits for asciisolid

use crate::error::{Error, Result};
use crate::point::*;
use crate::point_cloud::{PointCloud, SurfaceCloud};

/// Evenly spaced samples over `[start, end]` (or `[start, end)` without the endpoint).
///
/// With `endpoint` the last sample is exactly `end`, so closed angular ranges
/// repeat their seam.
pub fn linspace(start: f64, end: f64, count: usize, endpoint: bool) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let divisions = if endpoint { count - 1 } else { count };
            let step = (end - start) / divisions as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            if endpoint {
                values[count - 1] = end;
            }
            values
        }
    }
}

/// The two parameter axes a surface is sampled over.
///
/// Samples are produced row-major: every `inner` value for the first `outer`
/// value, then every `inner` value for the second, and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    pub outer: Vec<f64>,
    pub inner: Vec<f64>,
}

impl ParameterGrid {
    pub fn new(outer: Vec<f64>, inner: Vec<f64>) -> Self {
        Self { outer, inner }
    }

    /// Number of (u, v) pairs in the grid
    pub fn len(&self) -> usize {
        self.outer.len() * self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate (u, v) pairs in row-major order
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.outer
            .iter()
            .flat_map(move |&u| self.inner.iter().map(move |&v| (u, v)))
    }
}

/// Capability shared by every parametric solid.
///
/// `point` returns positions already offset by the solid's center and divided
/// by its maximum extent, so a solid fits in the unit ball. `normal` is the
/// unit outward direction and ignores center and scale.
pub trait SurfaceGenerator {
    /// Surface position for parameters (u, v)
    fn point(&self, u: f64, v: f64) -> Point3d;

    /// Unit outward normal for parameters (u, v)
    fn normal(&self, u: f64, v: f64) -> Vector3d;

    /// Sample axes at the given resolution
    fn parameter_grid(&self, resolution: usize) -> ParameterGrid;

    /// Distance used to scale positions into the unit ball
    fn max_extent(&self) -> f64;

    /// Closed opaque surfaces return true; samples facing away from the
    /// viewer may then be culled
    fn is_single_sided(&self) -> bool {
        true
    }

    /// Generate the co-indexed point cloud and normals
    fn generate(&self, resolution: usize) -> Result<SurfaceCloud> {
        validate_resolution(resolution)?;
        sample_grid(self, &self.parameter_grid(resolution))
    }
}

/// Evaluate a generator over every pair of a grid
pub fn sample_grid<G: SurfaceGenerator + ?Sized>(
    generator: &G,
    grid: &ParameterGrid,
) -> Result<SurfaceCloud> {
    let mut points = PointCloud::with_capacity(grid.len());
    let mut normals = Vec::with_capacity(grid.len());

    for (u, v) in grid.pairs() {
        points.push(generator.point(u, v));
        normals.push(generator.normal(u, v));
    }

    SurfaceCloud::new(points, normals, generator.is_single_sided())
}

/// Sampling needs at least one step along each axis
pub fn validate_resolution(resolution: usize) -> Result<()> {
    if resolution == 0 {
        return Err(Error::DegenerateGeometry(
            "resolution must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Radii and heights must be positive, finite numbers
pub fn validate_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::DegenerateGeometry(format!(
            "{} must be positive and finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Center offsets may be anywhere, but must be finite
pub fn validate_center(center: &Vector3d) -> Result<()> {
    if !center.iter().all(|c| c.is_finite()) {
        return Err(Error::DegenerateGeometry(format!(
            "center ({}, {}, {}) has non-finite components",
            center.x, center.y, center.z
        )));
    }
    Ok(())
}
