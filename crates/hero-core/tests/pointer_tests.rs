// Pointer normalization: viewport-centered coordinates, right/up positive.

use hero_core::PointerReading;

#[test]
fn center_maps_to_origin() {
    let r = PointerReading::normalize(400.0, 300.0, 800.0, 600.0);
    assert!(r.x.abs() < 1e-6);
    assert!(r.y.abs() < 1e-6);
}

#[test]
fn top_left_maps_to_minus_one_plus_one() {
    let r = PointerReading::normalize(0.0, 0.0, 800.0, 600.0);
    assert!((r.x + 1.0).abs() < 1e-6);
    assert!((r.y - 1.0).abs() < 1e-6);
}

#[test]
fn bottom_right_maps_to_plus_one_minus_one() {
    let r = PointerReading::normalize(800.0, 600.0, 800.0, 600.0);
    assert!((r.x - 1.0).abs() < 1e-6);
    assert!((r.y + 1.0).abs() < 1e-6);
}

#[test]
fn reading_defaults_to_center() {
    let r = PointerReading::default();
    assert_eq!(r, PointerReading { x: 0.0, y: 0.0 });
}

#[test]
fn quarter_points_scale_linearly() {
    let r = PointerReading::normalize(200.0, 150.0, 800.0, 600.0);
    assert!((r.x + 0.5).abs() < 1e-6);
    assert!((r.y - 0.5).abs() < 1e-6);
}
