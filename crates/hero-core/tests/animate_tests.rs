// Per-frame update: pure transform math, easing convergence, lifecycle.

use glam::Vec3;
use hero_core::constants::*;
use hero_core::{ease, shape_float_position, PointerReading, SceneAnimator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn running_animator(width: f32, seed: u64) -> SceneAnimator {
    let mut animator = SceneAnimator::new();
    animator.init(width, 900.0, &mut StdRng::seed_from_u64(seed));
    animator
}

#[test]
fn ease_moves_a_fixed_fraction_toward_the_target() {
    assert!((ease(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
    assert!((ease(4.0, 4.0, 0.05) - 4.0).abs() < 1e-6);
    assert!((ease(1.0, 0.0, 0.02) - 0.98).abs() < 1e-6);
}

#[test]
fn shape_position_is_a_pure_function_of_time_index_and_pointer() {
    let initial = Vec3::new(1.0, -2.0, 3.0);
    let pointer = PointerReading { x: 0.5, y: -0.25 };
    for (t, index) in [(0.0_f32, 0usize), (1.0, 1), (10.0, 5)] {
        let i = index as f32;
        let expected = Vec3::new(
            initial.x + (0.5 * t + i).sin() * 3.0 + pointer.x * 2.0,
            initial.y + (0.3 * t + i).cos() * 2.0 + pointer.y * 2.0,
            initial.z + (0.4 * t + 0.5 * i).sin() * 1.0,
        );
        let got = shape_float_position(initial, t, index, pointer);
        assert!((got - expected).length() < 1e-5, "mismatch at t={t} i={index}");
        // repeat evaluation: no hidden state
        assert_eq!(got, shape_float_position(initial, t, index, pointer));
    }
}

#[test]
fn advance_places_shapes_on_the_float_path() {
    let mut animator = running_animator(1440.0, 3);
    let initials: Vec<Vec3> = animator
        .scene()
        .unwrap()
        .shapes
        .iter()
        .map(|s| s.initial_position)
        .collect();
    let pointer = PointerReading { x: 0.3, y: -0.7 };

    let mut last = None;
    for _ in 0..10 {
        last = animator.advance(pointer);
    }
    let tf = last.unwrap();
    let t = animator.time();
    for (i, shape) in tf.shapes.iter().enumerate() {
        let expected = shape_float_position(initials[i], t, i, pointer);
        let translation = shape.model.w_axis.truncate();
        assert!((translation - expected).length() < 1e-4);
    }
}

#[test]
fn elapsed_time_accumulates_the_fixed_nominal_step() {
    let mut animator = running_animator(1440.0, 5);
    assert_eq!(animator.time(), 0.0);
    for _ in 0..3 {
        animator.advance(PointerReading::default());
    }
    assert!((animator.time() - 3.0 * FRAME_STEP_SEC).abs() < 1e-6);
}

#[test]
fn shape_rotation_accumulates_without_wraparound() {
    let mut animator = running_animator(1440.0, 9);
    let speeds: Vec<Vec3> = animator
        .scene()
        .unwrap()
        .shapes
        .iter()
        .map(|s| s.rotation_speed)
        .collect();
    let starts: Vec<Vec3> = animator
        .scene()
        .unwrap()
        .shapes
        .iter()
        .map(|s| s.rotation)
        .collect();
    for _ in 0..500 {
        animator.advance(PointerReading::default());
    }
    for ((shape, start), speed) in animator
        .scene()
        .unwrap()
        .shapes
        .iter()
        .zip(&starts)
        .zip(&speeds)
    {
        let expected = *start + *speed * 500.0;
        assert!((shape.rotation - expected).length() < 1e-3);
    }
}

#[test]
fn camera_and_batch_rotation_converge_without_overshoot() {
    let mut animator = running_animator(1440.0, 21);
    let pointer = PointerReading { x: 1.0, y: 1.0 };
    let cam_target_x = pointer.x * CAMERA_TARGET_X_SCALE;
    let rot_target_x = pointer.y * PARTICLE_ROT_TARGET_SCALE;

    let mut prev_eye_x = animator.camera().eye.x;
    let mut prev_rot_x = animator.scene().unwrap().particles.rotation.x;
    for _ in 0..200 {
        animator.advance(pointer);
        let eye_x = animator.camera().eye.x;
        let rot_x = animator.scene().unwrap().particles.rotation.x;
        assert!(eye_x > prev_eye_x, "camera must approach monotonically");
        assert!(eye_x < cam_target_x, "camera must never overshoot");
        assert!(rot_x > prev_rot_x);
        assert!(rot_x < rot_target_x);
        prev_eye_x = eye_x;
        prev_rot_x = rot_x;
    }
    // after 200 frames at k=0.02 the camera is most of the way there
    assert!(cam_target_x - prev_eye_x < cam_target_x * 0.1);
}

#[test]
fn camera_always_reaims_at_the_origin() {
    let mut animator = running_animator(1440.0, 23);
    for _ in 0..50 {
        animator.advance(PointerReading { x: -0.8, y: 0.6 });
    }
    assert_eq!(animator.camera().target, Vec3::ZERO);
}

#[test]
fn init_is_idempotent() {
    let mut animator = running_animator(1440.0, 31);
    let first_particle = animator.scene().unwrap().particles.instances[0];
    animator.advance(PointerReading::default());
    let time_before = animator.time();

    // second init with a different seed must be a no-op
    animator.init(375.0, 700.0, &mut StdRng::seed_from_u64(99));
    let scene = animator.scene().unwrap();
    assert_eq!(scene.particles.instances.len(), PARTICLES_DESKTOP);
    assert_eq!(scene.shapes.len(), SHAPES_DESKTOP);
    assert_eq!(scene.particles.instances[0].position, first_particle.position);
    assert_eq!(animator.time(), time_before);
}

#[test]
fn resize_never_regenerates_entity_counts() {
    let mut animator = running_animator(1440.0, 37);
    animator.resize(320.0, 480.0);
    let scene = animator.scene().unwrap();
    assert_eq!(scene.particles.instances.len(), PARTICLES_DESKTOP);
    assert_eq!(scene.shapes.len(), SHAPES_DESKTOP);
    assert!((animator.camera().aspect - 320.0 / 480.0).abs() < 1e-6);
}

#[test]
fn destroy_releases_the_scene_and_stops_advancing() {
    let mut animator = running_animator(1440.0, 41);
    assert!(animator.is_running());
    animator.destroy();
    assert!(!animator.is_running());
    assert!(animator.scene().is_none());
    assert!(animator.advance(PointerReading::default()).is_none());
    assert_eq!(animator.time(), 0.0);

    // a full re-init brings the animator back
    animator.init(375.0, 700.0, &mut StdRng::seed_from_u64(41));
    assert!(animator.is_running());
    assert_eq!(
        animator.scene().unwrap().particles.instances.len(),
        PARTICLES_MOBILE
    );
}

#[test]
fn snapshot_carries_light_positions_independent_of_pointer() {
    let mut a = running_animator(1440.0, 43);
    let mut b = running_animator(1440.0, 43);
    let tf_a = a.advance(PointerReading { x: 1.0, y: -1.0 }).unwrap();
    let tf_b = b.advance(PointerReading::default()).unwrap();
    for (pa, pb) in tf_a.light_positions.iter().zip(tf_b.light_positions) {
        assert!((*pa - pb).length() < 1e-6);
    }
}
