use site_core::{ease_in_out_cubic, lerp, Easing, Tween};

#[test]
fn lerp_endpoints() {
    for &(a, b) in &[(0.0f32, 1.0f32), (-3.5, 7.25), (900.0, -2600.0), (2.0, 2.0)] {
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }
}

#[test]
fn lerp_midpoint() {
    assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
    assert!((lerp(-4.0, 4.0, 0.25) + 2.0).abs() < 1e-6);
}

#[test]
fn ease_boundaries() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert!((ease_in_out_cubic(1.0) - 1.0).abs() < 1e-6);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn ease_clamps_out_of_range_input() {
    assert_eq!(ease_in_out_cubic(-2.0), 0.0);
    assert!((ease_in_out_cubic(3.0) - 1.0).abs() < 1e-6);
}

#[test]
fn ease_is_monotonic() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_in_out_cubic(i as f32 / 100.0);
        assert!(v >= prev, "not monotonic at step {}", i);
        prev = v;
    }
}

#[test]
fn tween_saturates_past_its_duration() {
    let tw = Tween::new(0.0, 10.0, 2.0, Easing::Linear);
    assert_eq!(tw.sample(0.0), 0.0);
    assert!((tw.sample(1.0) - 5.0).abs() < 1e-5);
    assert_eq!(tw.sample(2.0), 10.0);
    assert_eq!(tw.sample(5.0), 10.0);
}

#[test]
fn zero_duration_tween_saturates_at_end_value() {
    let tw = Tween::new(3.0, 8.0, 0.0, Easing::CubicInOut);
    assert_eq!(tw.sample(0.0), 8.0);
}
