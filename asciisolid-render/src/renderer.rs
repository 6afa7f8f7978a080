//! The full per-frame pipeline

use crate::frame::Frame;
use crate::occlusion::{resolve_occlusion, RasterSample};
use crate::projection::Projector;
use crate::raster::{Cell, Window};
use crate::shading::{GlyphRamp, Shader};
use asciisolid_core::{EulerAngles, Point3d, Result, SurfaceCloud, Transform3D, Vector3d};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// When to drop samples whose normals face away from the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CullMode {
    /// Cull single-sided surfaces only
    #[default]
    Auto,
    Enabled,
    Disabled,
}

impl CullMode {
    fn applies_to(&self, cloud: &SurfaceCloud) -> bool {
        match self {
            CullMode::Auto => cloud.is_single_sided(),
            CullMode::Enabled => true,
            CullMode::Disabled => false,
        }
    }
}

/// Raw render settings; directions need not be normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Direction of the single directional light
    pub light: [f64; 3],
    /// Normal of the projection plane
    pub plane: [f64; 3],
    /// Canvas size as [width, height]; frames are one larger in each direction
    pub window: [usize; 2],
    pub cull: CullMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            light: [1.0, 1.0, 1.0],
            plane: [0.0, 0.0, 1.0],
            window: [70, 35],
            cull: CullMode::Auto,
        }
    }
}

/// Sample counts for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Samples in the input cloud
    pub samples: usize,
    /// Samples left after back-face culling
    pub visible: usize,
    /// Samples drawn after occlusion (one per occupied cell)
    pub drawn: usize,
}

/// Validated pipeline state: projector, shader and canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    projector: Projector,
    shader: Shader,
    window: Window,
    cull: CullMode,
}

impl Renderer {
    /// Build a renderer with the default glyph ramp
    pub fn new(config: &RenderConfig) -> Result<Self> {
        Self::with_ramp(config, GlyphRamp::default())
    }

    /// Build a renderer with a custom glyph ramp
    pub fn with_ramp(config: &RenderConfig, ramp: GlyphRamp) -> Result<Self> {
        Ok(Self {
            projector: Projector::new(Vector3d::from(config.plane))?,
            shader: Shader::new(Vector3d::from(config.light), ramp)?,
            window: Window::new(config.window[0], config.window[1])?,
            cull: config.cull,
        })
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn shader(&self) -> &Shader {
        &self.shader
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Re-aim the projection plane. On error the previous plane is kept.
    pub fn set_projection_plane(&mut self, plane: [f64; 3]) -> Result<()> {
        self.projector = Projector::new(Vector3d::from(plane))?;
        Ok(())
    }

    /// Re-aim the light. On error the previous light is kept.
    pub fn set_light_direction(&mut self, light: [f64; 3]) -> Result<()> {
        self.shader.set_light(Vector3d::from(light))
    }

    pub fn set_cull_mode(&mut self, cull: CullMode) {
        self.cull = cull;
    }

    /// Render a cloud rotated by `angles`
    pub fn render(&self, cloud: &SurfaceCloud, angles: &EulerAngles) -> Frame {
        self.render_transformed(cloud, &Transform3D::from_euler(angles))
    }

    /// Render a cloud under an arbitrary rigid transform
    pub fn render_transformed(&self, cloud: &SurfaceCloud, transform: &Transform3D) -> Frame {
        self.render_with_stats(cloud, transform).0
    }

    /// Render and report how many samples survived each stage
    pub fn render_with_stats(
        &self,
        cloud: &SurfaceCloud,
        transform: &Transform3D,
    ) -> (Frame, RenderStats) {
        let points: Vec<Point3d> = cloud
            .points()
            .par_iter()
            .map(|p| transform.transform_point(p))
            .collect();
        let normals: Vec<Vector3d> = cloud
            .normals()
            .par_iter()
            .map(|n| transform.transform_vector(n))
            .collect();

        let visible: Vec<usize> = if self.cull.applies_to(cloud) {
            self.projector.filter_by_normal(&normals)
        } else {
            (0..points.len()).collect()
        };

        let samples: Vec<RasterSample> = visible
            .par_iter()
            .map(|&idx| {
                let projected = self.projector.project_point(&points[idx]);
                RasterSample {
                    cell: self.window.fit(&projected.coords),
                    depth: projected.depth,
                }
            })
            .collect();

        let survivors = resolve_occlusion(&samples);

        let cells: Vec<(Cell, char)> = survivors
            .par_iter()
            .map(|&s| (samples[s].cell, self.shader.shade(&normals[visible[s]])))
            .collect();

        let stats = RenderStats {
            samples: cloud.len(),
            visible: visible.len(),
            drawn: cells.len(),
        };
        tracing::debug!(
            samples = stats.samples,
            visible = stats.visible,
            drawn = stats.drawn,
            "Rendered frame"
        );

        (Frame::compose(&self.window, cells), stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciisolid_core::{Error, NormalPoint3d};

    fn sample(position: [f64; 3], normal: [f64; 3]) -> NormalPoint3d {
        NormalPoint3d {
            position: Point3d::from(position),
            normal: Vector3d::from(normal),
        }
    }

    #[test]
    fn test_config_validation() {
        let zero_light = RenderConfig { light: [0.0; 3], ..Default::default() };
        assert!(matches!(Renderer::new(&zero_light), Err(Error::InvalidDirection(_))));

        let zero_plane = RenderConfig { plane: [0.0; 3], ..Default::default() };
        assert!(matches!(Renderer::new(&zero_plane), Err(Error::InvalidDirection(_))));

        let empty_window = RenderConfig { window: [0, 35], ..Default::default() };
        assert!(matches!(Renderer::new(&empty_window), Err(Error::InvalidWindow(_))));
    }

    #[test]
    fn test_nearest_sample_is_shaded() {
        // Both samples land on the center cell; the nearer one faces the light
        let cloud = SurfaceCloud::from_samples(
            &[
                sample([0.0, 0.0, -0.5], [-1.0, 0.0, 0.0]),
                sample([0.0, 0.0, 0.5], [0.0, 0.0, 1.0]),
            ],
            false,
        );
        let config = RenderConfig { light: [0.0, 0.0, 1.0], ..Default::default() };
        let renderer = Renderer::new(&config).unwrap();

        let (frame, stats) = renderer.render_with_stats(&cloud, &Transform3D::identity());
        assert_eq!(stats.drawn, 1);
        assert_eq!(frame.get(Cell::new(35, 17)), Some('@'));
    }

    #[test]
    fn test_cull_modes() {
        let cloud = SurfaceCloud::from_samples(
            &[
                sample([0.5, 0.5, 0.1], [0.0, 0.0, 1.0]),
                sample([-0.5, -0.5, -0.1], [0.0, 0.0, -1.0]),
            ],
            true,
        );
        let mut renderer = Renderer::new(&RenderConfig::default()).unwrap();
        let identity = Transform3D::identity();

        let (_, auto) = renderer.render_with_stats(&cloud, &identity);
        assert_eq!(auto.visible, 1);

        renderer.set_cull_mode(CullMode::Disabled);
        let (_, disabled) = renderer.render_with_stats(&cloud, &identity);
        assert_eq!(disabled.visible, 2);
        assert_eq!(disabled.drawn, 2);
    }

    #[test]
    fn test_set_projection_plane_keeps_previous_on_error() {
        let mut renderer = Renderer::new(&RenderConfig::default()).unwrap();
        assert!(renderer.set_projection_plane([0.0, 0.0, 0.0]).is_err());
        assert_eq!(renderer.projector().normal().into_inner(), Vector3d::z());

        renderer.set_projection_plane([0.0, 2.0, 0.0]).unwrap();
        assert_eq!(renderer.projector().normal().into_inner(), Vector3d::y());
    }

    #[test]
    fn test_set_light_direction() {
        let mut renderer = Renderer::new(&RenderConfig::default()).unwrap();
        renderer.set_light_direction([0.0, 0.0, -4.0]).unwrap();
        assert_eq!(renderer.shader().light().into_inner(), -Vector3d::z());
        assert!(renderer.set_light_direction([0.0; 3]).is_err());
    }

    #[test]
    fn test_translation_moves_points() {
        let cloud = SurfaceCloud::from_samples(&[sample([0.0, 0.0, 0.0], [0.0, 0.0, 1.0])], true);
        let renderer = Renderer::new(&RenderConfig::default()).unwrap();

        let frame = renderer.render_transformed(&cloud, &Transform3D::translation(0.5, 0.0, 0.0));
        // (0.5 + 1) * 35 = 52.5 -> 52
        assert_ne!(frame.get(Cell::new(52, 17)), Some(' '));
        assert_eq!(frame.filled_cells(), 1);
    }
}
