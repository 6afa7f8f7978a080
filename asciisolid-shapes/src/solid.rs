//! Runtime selection between the concrete solids

use crate::{Cone, Cylinder, Sphere, Torus};
use asciisolid_core::{ParameterGrid, Point3d, Result, SurfaceCloud, SurfaceGenerator, Vector3d};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which parametric solid to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolidKind {
    Torus,
    Sphere,
    Cylinder,
    Cone,
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolidKind::Torus => write!(f, "torus"),
            SolidKind::Sphere => write!(f, "sphere"),
            SolidKind::Cylinder => write!(f, "cylinder"),
            SolidKind::Cone => write!(f, "cone"),
        }
    }
}

/// One of the supported solids, chosen at construction time
#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
    Torus(Torus),
    Sphere(Sphere),
    Cylinder(Cylinder),
    Cone(Cone),
}

impl Solid {
    pub fn torus(major_radius: f64, minor_radius: f64, center: Vector3d) -> Result<Self> {
        Ok(Solid::Torus(Torus::new(major_radius, minor_radius, center)?))
    }

    pub fn sphere(radius: f64, center: Vector3d) -> Result<Self> {
        Ok(Solid::Sphere(Sphere::new(radius, center)?))
    }

    pub fn cylinder(radius: f64, height: f64, center: Vector3d) -> Result<Self> {
        Ok(Solid::Cylinder(Cylinder::new(radius, height, center)?))
    }

    pub fn cone(radius: f64, height: f64, center: Vector3d) -> Result<Self> {
        Ok(Solid::Cone(Cone::new(radius, height, center)?))
    }

    pub fn kind(&self) -> SolidKind {
        match self {
            Solid::Torus(_) => SolidKind::Torus,
            Solid::Sphere(_) => SolidKind::Sphere,
            Solid::Cylinder(_) => SolidKind::Cylinder,
            Solid::Cone(_) => SolidKind::Cone,
        }
    }

    fn generator(&self) -> &dyn SurfaceGenerator {
        match self {
            Solid::Torus(s) => s,
            Solid::Sphere(s) => s,
            Solid::Cylinder(s) => s,
            Solid::Cone(s) => s,
        }
    }
}

impl SurfaceGenerator for Solid {
    fn point(&self, u: f64, v: f64) -> Point3d {
        self.generator().point(u, v)
    }

    fn normal(&self, u: f64, v: f64) -> Vector3d {
        self.generator().normal(u, v)
    }

    fn parameter_grid(&self, resolution: usize) -> ParameterGrid {
        self.generator().parameter_grid(resolution)
    }

    fn max_extent(&self) -> f64 {
        self.generator().max_extent()
    }

    fn is_single_sided(&self) -> bool {
        self.generator().is_single_sided()
    }

    fn generate(&self, resolution: usize) -> Result<SurfaceCloud> {
        let cloud = self.generator().generate(resolution)?;
        tracing::debug!(
            solid = %self.kind(),
            resolution,
            samples = cloud.len(),
            single_sided = cloud.is_single_sided(),
            "Generated surface cloud"
        );
        Ok(cloud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_delegates_generation() {
        let solid = Solid::cone(1.0, 2.0, Vector3d::zeros()).unwrap();
        let direct = Cone::new(1.0, 2.0, Vector3d::zeros()).unwrap().generate(12).unwrap();
        assert_eq!(solid.generate(12).unwrap(), direct);
        assert_eq!(solid.kind(), SolidKind::Cone);
    }

    #[test]
    fn test_solid_sidedness() {
        let torus = Solid::torus(2.0, 1.0, Vector3d::zeros()).unwrap();
        let cylinder = Solid::cylinder(1.0, 2.0, Vector3d::zeros()).unwrap();
        assert!(torus.is_single_sided());
        assert!(!cylinder.is_single_sided());
    }

    #[test]
    fn test_solid_constructors_validate() {
        assert!(Solid::sphere(-1.0, Vector3d::zeros()).is_err());
        assert!(Solid::cylinder(1.0, -2.0, Vector3d::zeros()).is_err());
    }

    #[test]
    fn test_solid_kind_display() {
        assert_eq!(SolidKind::Cylinder.to_string(), "cylinder");
    }
}
