//! Point cloud data structures and functionality

use crate::error::{Error, Result};
use crate::point::*;
use crate::transform::Transform3D;
use serde::{Deserialize, Serialize};

/// Ordered sample positions; generation order is preserved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloud<T> {
    pub points: Vec<T>,
}

/// A point cloud with 3D points
pub type PointCloud3d = PointCloud<Point3d>;

impl<T> PointCloud<T> {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
        }
    }

    /// Create a new point cloud with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a point cloud from a vector of points
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the cloud
    pub fn push(&mut self, point: T) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.points.iter()
    }
}

impl<T> Default for PointCloud<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a PointCloud<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> Extend<T> for PointCloud<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<T> FromIterator<T> for PointCloud<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

/// Sample positions of a solid together with their co-indexed unit normals.
///
/// Index `i` of `normals` always belongs to index `i` of `points`; the
/// constructor refuses arrays of different length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceCloud {
    points: PointCloud3d,
    normals: Vec<Vector3d>,
    single_sided: bool,
}

impl SurfaceCloud {
    /// Pair a point cloud with its normals
    pub fn new(points: PointCloud3d, normals: Vec<Vector3d>, single_sided: bool) -> Result<Self> {
        if points.len() != normals.len() {
            return Err(Error::MismatchedNormals {
                points: points.len(),
                normals: normals.len(),
            });
        }

        Ok(Self {
            points,
            normals,
            single_sided,
        })
    }

    /// Build from samples carrying both position and normal
    pub fn from_samples(samples: &[NormalPoint3d], single_sided: bool) -> Self {
        Self {
            points: samples.iter().map(|s| s.position).collect(),
            normals: samples.iter().map(|s| s.normal).collect(),
            single_sided,
        }
    }

    pub fn points(&self) -> &[Point3d] {
        &self.points.points
    }

    pub fn normals(&self) -> &[Vector3d] {
        &self.normals
    }

    /// Whether the surface is an opaque outer shell, so samples facing away
    /// from the viewer can never be seen
    pub fn is_single_sided(&self) -> bool {
        self.single_sided
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over (position, normal) pairs in generation order
    pub fn samples(&self) -> impl Iterator<Item = NormalPoint3d> + '_ {
        self.points
            .iter()
            .zip(self.normals.iter())
            .map(|(position, normal)| NormalPoint3d {
                position: *position,
                normal: *normal,
            })
    }

    /// Append another cloud's samples after this one's.
    ///
    /// The result is single-sided only when both inputs are.
    pub fn concat(mut self, other: SurfaceCloud) -> Self {
        self.points.extend(other.points.points);
        self.normals.extend(other.normals);
        self.single_sided &= other.single_sided;
        self
    }

    /// Move every sample by a rigid transform; translation affects positions only
    pub fn transformed(&self, transform: &Transform3D) -> Self {
        Self {
            points: self.points.iter().map(|p| transform.transform_point(p)).collect(),
            normals: self.normals.iter().map(|n| transform.transform_vector(n)).collect(),
            single_sided: self.single_sided,
        }
    }
}
