// Scene generation: viewport-dependent counts and static parameter bounds.

use hero_core::color::hsl_to_rgb;
use hero_core::constants::*;
use hero_core::{Scene, SceneParams, ShapeKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generate(width: f32, seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    Scene::generate(SceneParams::for_viewport(width), &mut rng)
}

#[test]
fn narrow_viewport_builds_reduced_scene() {
    let params = SceneParams::for_viewport(767.0);
    assert_eq!(params.particle_count, PARTICLES_MOBILE);
    assert_eq!(params.shape_count, SHAPES_MOBILE);
}

#[test]
fn threshold_viewport_builds_full_scene() {
    let params = SceneParams::for_viewport(768.0);
    assert_eq!(params.particle_count, PARTICLES_DESKTOP);
    assert_eq!(params.shape_count, SHAPES_DESKTOP);
}

#[test]
fn generated_counts_match_params() {
    let scene = generate(1440.0, 7);
    assert_eq!(scene.particles.instances.len(), PARTICLES_DESKTOP);
    assert_eq!(scene.shapes.len(), SHAPES_DESKTOP);

    let scene = generate(375.0, 7);
    assert_eq!(scene.particles.instances.len(), PARTICLES_MOBILE);
    assert_eq!(scene.shapes.len(), SHAPES_MOBILE);
}

#[test]
fn particles_sampled_within_bounds() {
    let scene = generate(1440.0, 11);
    for p in &scene.particles.instances {
        assert!(p.position[0].abs() <= PARTICLE_SPREAD_XY / 2.0);
        assert!(p.position[1].abs() <= PARTICLE_SPREAD_XY / 2.0);
        assert!(p.position[2].abs() <= PARTICLE_SPREAD_Z / 2.0);
        assert!(p.size >= PARTICLE_SIZE_MIN);
        assert!(p.size < PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN);
        assert!(PALETTE.contains(&p.color), "color not drawn from palette");
    }
}

#[test]
fn particle_batch_rotation_starts_at_rest() {
    let scene = generate(1440.0, 11);
    assert_eq!(scene.particles.rotation, glam::Vec2::ZERO);
}

#[test]
fn shapes_sampled_within_bounds() {
    let scene = generate(1440.0, 13);
    for shape in &scene.shapes {
        match shape.kind {
            ShapeKind::Sphere { radius } => {
                assert!(radius >= SPHERE_RADIUS_MIN);
                assert!(radius < SPHERE_RADIUS_MIN + SPHERE_RADIUS_SPAN);
            }
            ShapeKind::Cuboid { x, y, z } => {
                for edge in [x, y, z] {
                    assert!(edge >= CUBOID_EDGE_MIN);
                    assert!(edge < CUBOID_EDGE_MIN + CUBOID_EDGE_SPAN);
                }
            }
            ShapeKind::Cone { radius, height } => {
                assert!(radius >= CONE_RADIUS_MIN);
                assert!(radius < CONE_RADIUS_MIN + CONE_RADIUS_SPAN);
                assert!(height >= CONE_HEIGHT_MIN);
                assert!(height < CONE_HEIGHT_MIN + CONE_HEIGHT_SPAN);
            }
        }
        assert!(shape.initial_position.x.abs() <= SHAPE_SPREAD_X / 2.0);
        assert!(shape.initial_position.y.abs() <= SHAPE_SPREAD_Y / 2.0);
        assert!(shape.initial_position.z.abs() <= SHAPE_SPREAD_Z / 2.0);
        for axis in shape.rotation_speed.to_array() {
            assert!(axis.abs() <= SHAPE_ROT_SPEED_SPAN / 2.0);
        }
        for channel in shape.color {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}

#[test]
fn orbit_lights_are_antiphase_circles() {
    let scene = generate(1440.0, 17);
    let [l0, l1] = scene.lights;
    for t in [0.0_f32, 1.0, 10.0] {
        let p0 = l0.position_at(t);
        assert!((p0.x - (0.7 * t).sin() * 30.0).abs() < 1e-4);
        assert!((p0.z - (0.7 * t).cos() * 20.0).abs() < 1e-4);
        assert!((p0.y - 20.0).abs() < 1e-6);

        let p1 = l1.position_at(t);
        assert!((p1.x - (0.5 * t).cos() * 25.0).abs() < 1e-4);
        assert!((p1.z - (0.5 * t).sin() * 25.0).abs() < 1e-4);
        assert!((p1.y + 20.0).abs() < 1e-6);
    }
}

#[test]
fn hsl_to_rgb_hits_primaries() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red[0] - 1.0).abs() < 1e-6 && red[1].abs() < 1e-6 && red[2].abs() < 1e-6);

    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    assert!(green[0].abs() < 1e-5 && (green[1] - 1.0).abs() < 1e-6 && green[2].abs() < 1e-5);

    let gray = hsl_to_rgb(0.42, 0.0, 0.25);
    assert_eq!(gray, [0.25, 0.25, 0.25]);

    // hue wraps
    let wrapped = hsl_to_rgb(1.65, 0.7, 0.6);
    let direct = hsl_to_rgb(0.65, 0.7, 0.6);
    for (a, b) in wrapped.iter().zip(direct) {
        assert!((a - b).abs() < 1e-6);
    }
}
