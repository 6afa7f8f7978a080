//! 3D transformation utilities

use nalgebra::{Matrix3, Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Rotation angles about the fixed world axes, in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerAngles {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Angles scaled by a frame counter, used by animation drivers
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Column-vector rotation matrix for these angles.
    ///
    /// Samples are treated as row vectors right-multiplied by `Rx`, then `Ry`,
    /// then `Rz`, i.e. `v' = v * Rx * Ry * Rz`. The equivalent column-vector
    /// form is `(Rx * Ry * Rz)^T * v`. Order matters; rotations do not commute.
    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        let (sx, cx) = self.x.sin_cos();
        let (sy, cy) = self.y.sin_cos();
        let (sz, cz) = self.z.sin_cos();

        let rx = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, cx, -sx,
            0.0, sx, cx,
        );
        let ry = Matrix3::new(
            cy, 0.0, sy,
            0.0, 1.0, 0.0,
            -sy, 0.0, cy,
        );
        let rz = Matrix3::new(
            cz, -sz, 0.0,
            sz, cz, 0.0,
            0.0, 0.0, 1.0,
        );

        (rx * ry * rz).transpose()
    }
}

impl From<[f64; 3]> for EulerAngles {
    fn from(angles: [f64; 3]) -> Self {
        Self::new(angles[0], angles[1], angles[2])
    }
}

/// A 3D transformation that can be applied to points and point clouds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f64>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(dx, dy, dz)),
        }
    }

    /// Create a rotation transformation from a 3x3 rotation matrix
    pub fn rotation(rotation: Matrix3<f64>) -> Self {
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Create the rotation described by [`EulerAngles::rotation_matrix`]
    pub fn from_euler(angles: &EulerAngles) -> Self {
        Self::rotation(angles.rotation_matrix())
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the transformation to a direction; translation is ignored
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Compose this transformation with another; `other` is applied first
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f64) -> bool {
        let identity = Matrix4::identity();
        (self.matrix - identity).norm() < epsilon
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f64>> for Transform3D {
    fn from(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }
}

/// Rotate a batch of points
pub fn rotate_points(points: &[Point3<f64>], angles: &EulerAngles) -> Vec<Point3<f64>> {
    let rotation = angles.rotation_matrix();
    points.iter().map(|p| Point3::from(rotation * p.coords)).collect()
}

/// Rotate a batch of normals with the same rotation as [`rotate_points`].
///
/// Rotation preserves length, so unit normals stay unit normals.
pub fn rotate_normals(normals: &[Vector3<f64>], angles: &EulerAngles) -> Vec<Vector3<f64>> {
    let rotation = angles.rotation_matrix();
    normals.iter().map(|n| rotation * n).collect()
}

/// Translate a batch of points. Never apply this to normals.
pub fn translate_points(points: &[Point3<f64>], dx: f64, dy: f64, dz: f64) -> Vec<Point3<f64>> {
    let offset = Vector3::new(dx, dy, dz);
    points.iter().map(|p| p + offset).collect()
}
