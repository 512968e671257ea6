use glam::Vec3;
use site_core::{
    distance_fade, place_anchor, project_point, Camera, Viewport, SECTION_FADE_THRESHOLD,
};

fn viewport(w: f32, h: f32) -> Viewport {
    Viewport {
        width: w,
        height: h,
    }
}

#[test]
fn on_axis_point_projects_to_viewport_center() {
    let cam = Camera::facing_forward(Vec3::new(0.0, 0.0, 900.0), 16.0 / 9.0);
    let vp = viewport(1920.0, 1080.0);
    let (x, y) = project_point(Vec3::ZERO, &cam.view_proj(), vp).unwrap();
    assert!(x.abs() < 1e-3, "x = {}", x);
    assert!(y.abs() < 1e-3, "y = {}", y);
}

#[test]
fn resize_keeps_on_axis_point_centered() {
    // Same world point, different viewport/aspect: still dead center.
    for &(w, h) in &[(800.0f32, 600.0f32), (2560.0, 1440.0), (375.0, 812.0)] {
        let cam = Camera::facing_forward(Vec3::new(0.0, 0.0, 900.0), w / h);
        let (x, y) = project_point(Vec3::new(0.0, 0.0, -500.0), &cam.view_proj(), viewport(w, h))
            .unwrap();
        assert!(x.abs() < 1e-2 && y.abs() < 1e-2, "({}, {}) at {}x{}", x, y, w, h);
    }
}

#[test]
fn point_above_axis_moves_up_in_css_space() {
    let cam = Camera::facing_forward(Vec3::new(0.0, 0.0, 900.0), 1.0);
    let (_, y) = project_point(Vec3::new(0.0, 100.0, 0.0), &cam.view_proj(), viewport(1000.0, 1000.0))
        .unwrap();
    // CSS y grows downward, so a world-space +Y point lands at negative y.
    assert!(y < 0.0, "y = {}", y);
}

#[test]
fn point_behind_camera_is_hidden() {
    let cam = Camera::facing_forward(Vec3::new(0.0, 0.0, 900.0), 1.0);
    let vp = viewport(1000.0, 1000.0);
    assert!(project_point(Vec3::new(0.0, 0.0, 1500.0), &cam.view_proj(), vp).is_none());
}

#[test]
fn fade_saturates_at_zero_distance() {
    let f = distance_fade(0.0, SECTION_FADE_THRESHOLD);
    assert_eq!(f.opacity, 1.0);
    assert_eq!(f.scale, 1.0);
}

#[test]
fn fade_is_linear_within_threshold() {
    let f = distance_fade(SECTION_FADE_THRESHOLD * 0.5, SECTION_FADE_THRESHOLD);
    assert!((f.opacity - 0.5).abs() < 1e-6);
    assert!((f.scale - 0.5).abs() < 1e-6);
}

#[test]
fn fade_beyond_threshold_is_exactly_zero() {
    for d in [
        SECTION_FADE_THRESHOLD,
        SECTION_FADE_THRESHOLD * 2.0,
        SECTION_FADE_THRESHOLD * 100.0,
    ] {
        let f = distance_fade(d, SECTION_FADE_THRESHOLD);
        assert_eq!(f.opacity, 0.0);
        assert_eq!(f.scale, 0.0);
    }
}

#[test]
fn fade_with_degenerate_threshold_is_zero() {
    assert_eq!(distance_fade(10.0, 0.0).opacity, 0.0);
}

#[test]
fn distant_anchor_is_not_interactive() {
    let eye = Vec3::new(0.0, 0.0, 900.0);
    let cam = Camera::facing_forward(eye, 1.0);
    // Hero at z=0 is 900 away; with a 500 threshold it must be gone entirely.
    let p = place_anchor(Vec3::ZERO, eye, &cam.view_proj(), viewport(1000.0, 1000.0), 500.0)
        .unwrap();
    assert_eq!(p.opacity, 0.0);
    assert_eq!(p.scale, 0.0);
    assert!(!p.interactive);
}

#[test]
fn near_anchor_is_interactive() {
    let eye = Vec3::new(0.0, 0.0, 300.0);
    let cam = Camera::facing_forward(eye, 1.0);
    let p = place_anchor(
        Vec3::ZERO,
        eye,
        &cam.view_proj(),
        viewport(1000.0, 1000.0),
        SECTION_FADE_THRESHOLD,
    )
    .unwrap();
    assert!(p.opacity > 0.0);
    assert!(p.interactive);
}
