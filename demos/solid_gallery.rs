//! Prints every solid kind side by side at the same rotation

use asciisolid_core::{EulerAngles, SurfaceGenerator, Vector3d};
use asciisolid_render::{RenderConfig, Renderer};
use asciisolid_shapes::Solid;

fn main() -> anyhow::Result<()> {
    let solids = [
        Solid::torus(2.0, 1.0, Vector3d::zeros())?,
        Solid::sphere(1.0, Vector3d::zeros())?,
        Solid::cylinder(0.8, 2.0, Vector3d::zeros())?,
        Solid::cone(1.0, 2.0, Vector3d::zeros())?,
    ];

    let renderer = Renderer::new(&RenderConfig {
        window: [36, 18],
        ..RenderConfig::default()
    })?;
    let angles = EulerAngles::new(1.0, 0.4, 0.0);

    let frames = solids
        .iter()
        .map(|solid| {
            let cloud = solid.generate(120)?;
            Ok(renderer.render(&cloud, &angles))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let headers: Vec<String> = solids
        .iter()
        .zip(&frames)
        .map(|(solid, frame)| format!("{:<width$}", solid.kind().to_string(), width = frame.columns()))
        .collect();
    println!("{}", headers.join(" "));

    let rows = frames.first().map_or(0, |f| f.rows());
    for row in 0..rows {
        let line: Vec<String> = frames
            .iter()
            .filter_map(|frame| frame.row(row))
            .map(|glyphs| glyphs.iter().collect())
            .collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}
