// Sanity relationships between scene tuning constants.

use hero_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_valid_convergence_factors() {
    assert!(PARTICLE_ROT_EASE > 0.0 && PARTICLE_ROT_EASE < 1.0);
    assert!(CAMERA_EASE > 0.0 && CAMERA_EASE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn entity_counts_shrink_on_mobile() {
    assert!(PARTICLES_MOBILE < PARTICLES_DESKTOP);
    assert!(SHAPES_MOBILE < SHAPES_DESKTOP);
    assert!(MOBILE_WIDTH_THRESHOLD > 0.0);
}

#[test]
fn palette_channels_are_normalized() {
    for color in PALETTE {
        for channel in color {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_planes_and_fog_are_ordered() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(FOG_FAR > FOG_NEAR);
    assert!(CAMERA_Z > CAMERA_NEAR && CAMERA_Z < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_step_approximates_sixty_hz() {
    assert!(FRAME_STEP_SEC > 0.0);
    assert!((FRAME_STEP_SEC - 1.0 / 60.0).abs() < 0.002);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn generation_spans_are_positive() {
    assert!(PARTICLE_SPREAD_XY > PARTICLE_SPREAD_Z);
    assert!(PARTICLE_SIZE_SPAN > 0.0);
    assert!(SHAPE_ROT_SPEED_SPAN > 0.0);
    assert!(SPHERE_RADIUS_SPAN > 0.0 && CUBOID_EDGE_SPAN > 0.0 && CONE_HEIGHT_SPAN > 0.0);
    assert!(SHAPE_OPACITY > 0.0 && SHAPE_OPACITY < 1.0);
}
