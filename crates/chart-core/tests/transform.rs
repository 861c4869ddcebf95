// File: crates/chart-core/tests/transform.rs
// Purpose: Validate viewport / margin transforms and their inverses.

use chart_core::{ChartError, MarginScale, ScaleTransform};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn viewport_scales_normalized_units() {
    let s = MarginScale::new(800.0, 400.0).unwrap();
    assert!(close(s.to_viewport_x(50.0), 400.0));
    assert!(close(s.to_viewport_y(50.0), 200.0));
}

#[test]
fn margin_frame_with_y_up() {
    let s = MarginScale::new(100.0, 100.0).unwrap();
    assert!(close(s.to_margin_x(0.0), 10.0));
    assert!(close(s.to_margin_x(1.0), 90.0));
    // larger values are higher on the surface
    assert!(close(s.to_margin_y(0.0), 90.0));
    assert!(close(s.to_margin_y(1.0), 10.0));
    assert!(close(s.to_margin_y(0.5), 50.0));
}

#[test]
fn out_of_range_inputs_are_not_clamped() {
    let s = MarginScale::new(100.0, 100.0).unwrap();
    assert!(close(s.to_margin_x(1.5), 130.0));
    assert!(close(s.to_margin_y(-0.25), 110.0));
}

#[test]
fn round_trip() {
    let s = MarginScale::new(640.0, 480.0).unwrap();
    for i in 0..=50 {
        let v = i as f64 / 50.0;
        assert!(close(s.from_screen_x(s.to_screen_x(v)), v));
        assert!(close(s.from_screen_y(s.to_screen_y(v)), v));
    }
}

#[test]
fn rejects_bad_dimensions() {
    for (w, h) in [(0.0, 10.0), (10.0, -1.0), (f64::NAN, 10.0), (10.0, f64::INFINITY)] {
        assert!(matches!(MarginScale::new(w, h), Err(ChartError::InvalidDimensions { .. })));
    }
}
