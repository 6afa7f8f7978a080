//! Frame-by-frame animation of a solid

use crate::config::{ConfigError, SceneConfig};
use asciisolid_core::{EulerAngles, SurfaceCloud, SurfaceGenerator};
use asciisolid_render::{Frame, Renderer};
use asciisolid_shapes::SolidKind;
use std::io;
use std::time::Duration;

/// Per-frame motion: angles grow linearly with the tick, the plane optionally orbits
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub step: EulerAngles,
    pub frames: Option<usize>,
    pub delay: Duration,
    pub plane_orbit: Option<f64>,
}

impl Animation {
    /// Rotation applied at `tick`
    pub fn angles_at(&self, tick: usize) -> EulerAngles {
        self.step.scaled(tick as f64)
    }

    /// Projection plane normal at `tick`, when the plane is orbiting
    pub fn plane_at(&self, tick: usize) -> Option<[f64; 3]> {
        self.plane_orbit.map(|rate| {
            let phase = rate * tick as f64;
            [phase.sin(), 0.0, phase.cos()]
        })
    }

    /// Ticks to play, or `None` to run until stopped
    pub fn ticks(&self) -> Option<usize> {
        self.frames
    }
}

/// A solid sampled once, plus everything needed to draw it at any tick
#[derive(Debug, Clone)]
pub struct Scene {
    kind: SolidKind,
    cloud: SurfaceCloud,
    renderer: Renderer,
    animation: Animation,
}

impl Scene {
    pub fn from_config(config: &SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let solid = config.solid.build()?;
        let cloud = solid.generate(config.resolution)?;
        let renderer = config.build_renderer()?;
        let animation = Animation {
            step: EulerAngles::from(config.animation.angular_step),
            frames: config.animation.frames,
            delay: Duration::from_millis(config.animation.delay_ms),
            plane_orbit: config.animation.plane_orbit,
        };

        tracing::info!(
            solid = %solid.kind(),
            resolution = config.resolution,
            samples = cloud.len(),
            "Scene ready"
        );

        Ok(Self {
            kind: solid.kind(),
            cloud,
            renderer,
            animation,
        })
    }

    pub fn kind(&self) -> SolidKind {
        self.kind
    }

    pub fn cloud(&self) -> &SurfaceCloud {
        &self.cloud
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// Draw the frame for `tick`
    pub fn frame_at(&mut self, tick: usize) -> asciisolid_core::Result<Frame> {
        if let Some(plane) = self.animation.plane_at(tick) {
            self.renderer.set_projection_plane(plane)?;
        }
        Ok(self.renderer.render(&self.cloud, &self.animation.angles_at(tick)))
    }

    /// Draw a single frame at explicit angles
    pub fn frame_with(&self, angles: &EulerAngles) -> Frame {
        self.renderer.render(&self.cloud, angles)
    }

    fn status(&self, tick: usize) -> String {
        let angles = self.animation.angles_at(tick);
        format!(
            "{} | frame {} | x {:.2} y {:.2} z {:.2} | q to quit",
            self.kind, tick, angles.x, angles.y, angles.z
        )
    }
}

/// Destination for rendered frames
pub trait FrameSink {
    fn present(&mut self, frame: &Frame, status: &str) -> io::Result<()>;

    /// Wait before the next frame. Returns `false` to stop playback.
    fn pause(&mut self, delay: Duration) -> io::Result<bool>;
}

/// Play the scene into `sink`, returning the number of frames shown
pub fn play<S: FrameSink + ?Sized>(scene: &mut Scene, sink: &mut S) -> anyhow::Result<usize> {
    let limit = scene.animation.ticks();
    let delay = scene.animation.delay;
    let mut shown = 0;

    while limit.map_or(true, |limit| shown < limit) {
        let frame = scene.frame_at(shown)?;
        sink.present(&frame, &scene.status(shown))?;
        shown += 1;

        if !sink.pause(delay)? {
            tracing::info!(frames = shown, "Playback stopped");
            return Ok(shown);
        }
    }

    tracing::debug!(frames = shown, "Playback finished");
    Ok(shown)
}
