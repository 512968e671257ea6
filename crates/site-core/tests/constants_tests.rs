// Sanity checks over tuning constants and their relationships.

use site_core::constants::*;
use site_core::default_section_anchors;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factor_is_a_valid_lerp_fraction() {
    assert!(SCROLL_LERP_FACTOR > 0.0 && SCROLL_LERP_FACTOR < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_positive() {
    assert!(CAMERA_HOME_Z > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(SCROLL_RANGE_PX > 0.0);
    assert!(SECTION_FADE_THRESHOLD > 0.0);
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SPREAD > 0.0);
    assert!(CARD_TRANSITION_SEC > 0.0);
    assert!(CARD_FLIP_DEPTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reduced_motion_transition_is_shorter() {
    assert!(CARD_TRANSITION_REDUCED_SEC < CARD_TRANSITION_SEC);
    assert!(CARD_TRANSITION_REDUCED_SEC > 0.0);
}

#[test]
fn section_anchors_recede_in_depth() {
    let anchors = default_section_anchors();
    assert!(!anchors.is_empty());
    assert_eq!(anchors[0].position.z, 0.0);
    for pair in anchors.windows(2) {
        assert!(pair[1].position.z < pair[0].position.z);
    }
}

#[test]
fn far_plane_covers_the_whole_journey() {
    // The camera ends past the last section; everything must stay in frustum.
    let deepest = default_section_anchors()
        .last()
        .map(|a| a.position.z)
        .unwrap();
    let camera_floor = CAMERA_HOME_Z - (SCROLL_RANGE_PX + SCROLL_OVERSHOOT_PX);
    assert!(CAMERA_ZFAR > (CAMERA_HOME_Z - deepest));
    assert!(camera_floor < deepest, "journey passes the last section");
}
