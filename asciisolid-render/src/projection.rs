//! Orthogonal projection onto an arbitrary plane through the origin

use asciisolid_core::{normalize_direction, Direction, Point2d, Point3d, Result, Vector3d};
use nalgebra::{UnitQuaternion, Vector3};
use rayon::prelude::*;
use std::f64::consts::PI;

/// A point expressed in the projection plane's 2D coordinates, together with
/// its signed distance along the plane normal (larger is closer to the viewer)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub coords: Point2d,
    pub depth: f64,
}

/// Projects 3D samples onto the plane with unit normal `n`.
///
/// The plane's own axes are the images of x̂ and ŷ under the shortest
/// rotation carrying ẑ onto `n`. For the default plane `n = ẑ` that rotation
/// is the identity, so plane coordinates are plain (x, y).
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    normal: Direction,
    axis_u: Vector3d,
    axis_w: Vector3d,
}

impl Projector {
    /// Create a projector for the plane with the given (not necessarily unit) normal
    pub fn new(plane_normal: Vector3d) -> Result<Self> {
        Ok(Self::from_direction(normalize_direction(plane_normal)?))
    }

    /// Create a projector from an already normalized direction
    pub fn from_direction(normal: Direction) -> Self {
        let alignment = UnitQuaternion::rotation_between(&Vector3::z(), normal.as_ref())
            // Antiparallel to z: half turn about y, the limit of a plane orbiting about y
            .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI));

        Self {
            normal,
            axis_u: alignment * Vector3::x(),
            axis_w: alignment * Vector3::y(),
        }
    }

    pub fn normal(&self) -> &Direction {
        &self.normal
    }

    /// The plane's (u, w) axes in world coordinates
    pub fn plane_axes(&self) -> (Vector3d, Vector3d) {
        (self.axis_u, self.axis_w)
    }

    /// Signed distance of a point along the plane normal
    pub fn depth(&self, point: &Point3d) -> f64 {
        point.coords.dot(self.normal.as_ref())
    }

    /// Orthogonal projection `p - (p·n) n`, still in world coordinates
    pub fn onto_plane(&self, point: &Point3d) -> Point3d {
        point - self.normal.into_inner() * self.depth(point)
    }

    /// Project one point into plane coordinates
    pub fn project_point(&self, point: &Point3d) -> ProjectedPoint {
        let on_plane = self.onto_plane(point).coords;
        ProjectedPoint {
            coords: Point2d::new(on_plane.dot(&self.axis_u), on_plane.dot(&self.axis_w)),
            depth: self.depth(point),
        }
    }

    /// Project a batch of points, preserving order
    pub fn project(&self, points: &[Point3d]) -> Vec<ProjectedPoint> {
        points.par_iter().map(|p| self.project_point(p)).collect()
    }

    /// Whether a normal faces the viewer (`normal · n >= 0`)
    pub fn faces_viewer(&self, normal: &Vector3d) -> bool {
        normal.dot(self.normal.as_ref()) >= 0.0
    }

    /// Indices of the samples whose normals face the viewer, in input order.
    ///
    /// Used as a back-face cull for opaque single-sided surfaces.
    pub fn filter_by_normal(&self, normals: &[Vector3d]) -> Vec<usize> {
        normals
            .par_iter()
            .enumerate()
            .filter(|(_, n)| self.faces_viewer(n))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for Projector {
    /// Looking down the Z axis
    fn default() -> Self {
        Self::from_direction(Vector3::z_axis())
    }
}
