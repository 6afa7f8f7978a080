//! Basic usage example for asciisolid
//!
//! Builds a torus, samples it, and prints one shaded frame along with the
//! sample counts from each stage of the pipeline.

use asciisolid_core::{EulerAngles, SurfaceGenerator, Transform3D, Vector3d};
use asciisolid_render::{RenderConfig, Renderer};
use asciisolid_shapes::Solid;

fn main() -> anyhow::Result<()> {
    println!("asciisolid Basic Usage");
    println!("======================");

    let torus = Solid::torus(2.0, 1.0, Vector3d::zeros())?;
    let cloud = torus.generate(150)?;
    println!("Sampled {} with {} points", torus.kind(), cloud.len());

    let renderer = Renderer::new(&RenderConfig::default())?;
    let angles = EulerAngles::new(0.6, 0.3, 0.0);
    let (frame, stats) = renderer.render_with_stats(&cloud, &Transform3D::from_euler(&angles));

    println!("{frame}");
    println!(
        "samples: {}, facing viewer: {}, drawn: {}",
        stats.samples, stats.visible, stats.drawn
    );

    Ok(())
}
