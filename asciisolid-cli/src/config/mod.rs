mod loader;

use asciisolid_core::Vector3d;
use asciisolid_render::{GlyphRamp, RenderConfig, Renderer};
use asciisolid_shapes::{Solid, SolidKind};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::path::Path;

pub use loader::load_config;

/// Complete scene description: what to draw, how to draw it, how to animate it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub solid: SolidConfig,
    /// Samples along each parameter axis
    #[serde(default = "default_resolution")]
    pub resolution: usize,
    #[serde(default)]
    pub render: RenderConfig,
    /// Custom glyph ramp; the built-in ladder is used when absent
    #[serde(default)]
    pub ramp: Option<RampConfig>,
    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_resolution() -> usize {
    200
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            solid: SolidConfig::default(),
            resolution: default_resolution(),
            render: RenderConfig::default(),
            ramp: None,
            animation: AnimationConfig::default(),
        }
    }
}

/// Shape parameters, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SolidConfig {
    Torus {
        major_radius: f64,
        minor_radius: f64,
        #[serde(default)]
        center: [f64; 3],
    },
    Sphere {
        radius: f64,
        #[serde(default)]
        center: [f64; 3],
    },
    Cylinder {
        radius: f64,
        height: f64,
        #[serde(default)]
        center: [f64; 3],
    },
    Cone {
        radius: f64,
        height: f64,
        #[serde(default)]
        center: [f64; 3],
    },
}

impl SolidConfig {
    /// Reasonable proportions for each kind, centered at the origin
    pub fn default_for(kind: SolidKind) -> Self {
        let center = [0.0; 3];
        match kind {
            SolidKind::Torus => SolidConfig::Torus { major_radius: 2.0, minor_radius: 1.0, center },
            SolidKind::Sphere => SolidConfig::Sphere { radius: 1.0, center },
            SolidKind::Cylinder => SolidConfig::Cylinder { radius: 1.0, height: 2.0, center },
            SolidKind::Cone => SolidConfig::Cone { radius: 1.0, height: 2.0, center },
        }
    }

    pub fn kind(&self) -> SolidKind {
        match self {
            SolidConfig::Torus { .. } => SolidKind::Torus,
            SolidConfig::Sphere { .. } => SolidKind::Sphere,
            SolidConfig::Cylinder { .. } => SolidKind::Cylinder,
            SolidConfig::Cone { .. } => SolidKind::Cone,
        }
    }

    /// Construct the solid, validating its dimensions
    pub fn build(&self) -> asciisolid_core::Result<Solid> {
        match *self {
            SolidConfig::Torus { major_radius, minor_radius, center } => {
                Solid::torus(major_radius, minor_radius, Vector3d::from(center))
            }
            SolidConfig::Sphere { radius, center } => Solid::sphere(radius, Vector3d::from(center)),
            SolidConfig::Cylinder { radius, height, center } => {
                Solid::cylinder(radius, height, Vector3d::from(center))
            }
            SolidConfig::Cone { radius, height, center } => {
                Solid::cone(radius, height, Vector3d::from(center))
            }
        }
    }
}

impl Default for SolidConfig {
    fn default() -> Self {
        Self::default_for(SolidKind::Torus)
    }
}

/// Glyph ladder as written in the config file, densest level first
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RampConfig {
    pub levels: Vec<(f64, char)>,
    pub floor: char,
}

impl RampConfig {
    pub fn build(&self) -> asciisolid_core::Result<GlyphRamp> {
        GlyphRamp::new(self.levels.clone(), self.floor)
    }
}

/// Frame pacing and per-frame motion
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Number of frames to play; `None` plays until interrupted
    pub frames: Option<usize>,
    /// Pause between frames in milliseconds
    pub delay_ms: u64,
    /// Rotation added per frame about x, y and z, in radians
    pub angular_step: [f64; 3],
    /// Optional sweep of the projection plane about the y axis, radians per frame
    pub plane_orbit: Option<f64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: Some(100),
            delay_ms: 100,
            angular_step: [0.0, TAU / 100.0, 0.0],
            plane_orbit: None,
        }
    }
}

impl SceneConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_config(path)
    }

    /// Load from `path` if given, otherwise use the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Build the renderer described by the `render` and `ramp` sections
    pub fn build_renderer(&self) -> Result<Renderer, ConfigError> {
        let ramp = match &self.ramp {
            Some(ramp) => ramp.build()?,
            None => GlyphRamp::default(),
        };
        Ok(Renderer::with_ramp(&self.render, ramp)?)
    }

    /// Check every section without generating any geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 {
            return Err(ConfigError::Validation(
                "resolution must be positive".to_string(),
            ));
        }
        if let Some(0) = self.animation.frames {
            return Err(ConfigError::Validation(
                "animation.frames must be positive (omit it to play forever)".to_string(),
            ));
        }
        validate_angles("animation.angular_step", self.animation.angular_step)?;
        if let Some(rate) = self.animation.plane_orbit {
            if !rate.is_finite() {
                return Err(ConfigError::Validation(
                    "animation.plane_orbit must be finite".to_string(),
                ));
            }
        }
        self.solid.build()?;
        self.build_renderer()?;
        Ok(())
    }
}

/// Rotation angles must be finite
pub fn validate_angles(name: &str, angles: [f64; 3]) -> Result<(), ConfigError> {
    if !angles.iter().all(|a| a.is_finite()) {
        return Err(ConfigError::Validation(format!(
            "{} must be finite, got [{}, {}, {}]",
            name, angles[0], angles[1], angles[2]
        )));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid scene: {0}")]
    Scene(#[from] asciisolid_core::Error),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
