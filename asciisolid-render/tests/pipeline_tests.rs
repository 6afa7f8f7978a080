//! Integration tests for asciisolid-render
//!
//! These tests drive the whole pipeline with real solids and check the frame
//! level guarantees: fixed dimensions, blank background, determinism and
//! sensible culling behavior.

use asciisolid_core::{EulerAngles, SurfaceCloud, SurfaceGenerator, Transform3D, Vector3d};
use asciisolid_render::*;
use asciisolid_shapes::Solid;
use std::f64::consts::PI;

fn torus_cloud(resolution: usize) -> SurfaceCloud {
    Solid::torus(2.0, 1.0, Vector3d::zeros())
        .unwrap()
        .generate(resolution)
        .unwrap()
}

fn default_renderer() -> Renderer {
    Renderer::new(&RenderConfig {
        light: [1.0, 1.0, 1.0],
        plane: [0.0, 0.0, 1.0],
        window: [70, 35],
        cull: CullMode::Auto,
    })
    .unwrap()
}

#[test]
fn test_torus_end_to_end() {
    let cloud = torus_cloud(50);
    let renderer = default_renderer();

    let frame = renderer.render(&cloud, &EulerAngles::new(0.0, 0.0, 0.0));

    assert_eq!(frame.rows(), 36);
    assert_eq!(frame.columns(), 71);
    assert!(frame.filled_cells() > 0);
    for line in frame.lines() {
        assert_eq!(line.chars().count(), 71);
    }
}

#[test]
fn test_torus_has_a_hole() {
    let cloud = torus_cloud(100);
    let renderer = default_renderer();
    let frame = renderer.render(&cloud, &EulerAngles::default());

    // Looking straight down the axis the center of the ring stays empty
    assert_eq!(frame.get(Cell::new(35, 17)), Some(BLANK_GLYPH));
    // The ring itself is drawn at the outer equator, (1 + 2/3) * 35 = 58
    assert_ne!(frame.get(Cell::new(58, 17)), Some(BLANK_GLYPH));
}

#[test]
fn test_frame_dimensions_are_constant() {
    let renderer = default_renderer();
    for solid in [
        Solid::torus(2.0, 1.0, Vector3d::zeros()).unwrap(),
        Solid::sphere(1.0, Vector3d::new(0.3, 0.0, 0.0)).unwrap(),
        Solid::cylinder(1.0, 2.0, Vector3d::zeros()).unwrap(),
        Solid::cone(1.0, 2.0, Vector3d::zeros()).unwrap(),
    ] {
        let cloud = solid.generate(40).unwrap();
        for step in 0..8 {
            let angle = step as f64 * PI / 4.0;
            let frame = renderer.render(&cloud, &EulerAngles::new(angle, angle * 0.5, 0.0));
            assert_eq!(frame.rows(), 36, "{} rows", solid.kind());
            assert!(frame.lines().all(|line| line.chars().count() == 71));
        }
    }
}

#[test]
fn test_empty_cloud_renders_blank_frame() {
    let renderer = default_renderer();
    let cloud = SurfaceCloud::from_samples(&[], true);
    let frame = renderer.render(&cloud, &EulerAngles::default());

    assert_eq!(frame.filled_cells(), 0);
    assert_eq!(frame.rows(), 36);
    assert!(frame.to_string().chars().all(|c| c == BLANK_GLYPH || c == '\n'));
}

#[test]
fn test_rendering_is_deterministic() {
    let cloud = torus_cloud(120);
    let renderer = default_renderer();
    let angles = EulerAngles::new(0.4, 1.3, -0.2);

    let first = renderer.render(&cloud, &angles);
    for _ in 0..5 {
        assert_eq!(renderer.render(&cloud, &angles), first);
    }
}

#[test]
fn test_rotation_changes_the_frame() {
    let cloud = torus_cloud(80);
    let renderer = default_renderer();

    let still = renderer.render(&cloud, &EulerAngles::default());
    let turned = renderer.render(&cloud, &EulerAngles::new(0.0, PI / 3.0, 0.0));
    assert_ne!(still, turned);
}

#[test]
fn test_culling_never_adds_cells() {
    let cloud = Solid::sphere(1.0, Vector3d::zeros()).unwrap().generate(60).unwrap();
    let mut renderer = default_renderer();
    let identity = Transform3D::identity();

    let (_, culled) = renderer.render_with_stats(&cloud, &identity);
    renderer.set_cull_mode(CullMode::Disabled);
    let (_, unculled) = renderer.render_with_stats(&cloud, &identity);

    assert!(culled.visible < unculled.visible);
    assert!(culled.drawn <= unculled.drawn);
    assert_eq!(culled.samples, unculled.samples);
}

#[test]
fn test_cylinder_is_not_culled_by_default() {
    let cloud = Solid::cylinder(1.0, 2.0, Vector3d::zeros()).unwrap().generate(30).unwrap();
    let renderer = default_renderer();
    let (_, stats) = renderer.render_with_stats(&cloud, &Transform3D::identity());
    assert_eq!(stats.visible, stats.samples);
}

#[test]
fn test_oblique_plane_renders_within_bounds() {
    let cloud = Solid::cone(1.0, 2.0, Vector3d::zeros()).unwrap().generate(50).unwrap();
    let mut renderer = default_renderer();

    for step in 0..10 {
        let t = step as f64 / 10.0;
        renderer.set_projection_plane([t.sin(), 0.0, t.cos()]).unwrap();
        let frame = renderer.render(&cloud, &EulerAngles::default());
        assert!(frame.filled_cells() > 0);
        assert_eq!(frame.lines().count(), 36);
    }
}

#[test]
fn test_light_behind_viewer_darkens_front() {
    let cloud = Solid::sphere(1.0, Vector3d::zeros()).unwrap().generate(60).unwrap();
    let lit = Renderer::new(&RenderConfig {
        light: [0.0, 0.0, 1.0],
        ..RenderConfig::default()
    })
    .unwrap();
    let unlit = Renderer::new(&RenderConfig {
        light: [0.0, 0.0, -1.0],
        ..RenderConfig::default()
    })
    .unwrap();

    let center = Cell::new(35, 17);
    assert_eq!(lit.render(&cloud, &EulerAngles::default()).get(center), Some('@'));
    assert_eq!(unlit.render(&cloud, &EulerAngles::default()).get(center), Some('·'));
}
