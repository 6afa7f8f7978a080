//! Sweeps the projection plane around a fixed cone
//!
//! Uses the animation driver with a stationary solid and an orbiting plane,
//! printing frames one after another instead of redrawing the terminal.

use asciisolid_cli::config::{SceneConfig, SolidConfig};
use asciisolid_cli::{play, PlainDisplay, Scene};
use asciisolid_shapes::SolidKind;
use std::f64::consts::PI;

fn main() -> anyhow::Result<()> {
    let mut config = SceneConfig::default();
    config.solid = SolidConfig::default_for(SolidKind::Cone);
    config.resolution = 120;
    config.render.window = [50, 25];
    config.animation.frames = Some(8);
    config.animation.delay_ms = 250;
    config.animation.angular_step = [0.0, 0.0, 0.0];
    config.animation.plane_orbit = Some(PI / 8.0);

    let mut scene = Scene::from_config(&config)?;
    let shown = play(&mut scene, &mut PlainDisplay::stdout())?;
    println!("{shown} frames");

    Ok(())
}
