//! The projection bridge: world-space anchors onto screen-space placements.

use glam::{Mat4, Vec3, Vec4};

/// Viewport in CSS pixels, the space DOM transforms are expressed in.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// What a frame computed for one tracked element.
///
/// `x`/`y` are pixel offsets from the viewport center (negative y is up, which
/// matches CSS translate once the sign flip below is applied).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPlacement {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
    pub interactive: bool,
}

/// Opacity and scale derived from camera distance, linear falloff clamped to
/// \[0, 1\]. At or beyond `threshold` both are exactly zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub opacity: f32,
    pub scale: f32,
}

#[inline]
pub fn distance_fade(distance: f32, threshold: f32) -> Fade {
    let v = if threshold > 0.0 {
        (1.0 - distance / threshold).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Fade {
        opacity: v,
        scale: v,
    }
}

/// Project a world position through `view_proj` into center-relative pixel
/// coordinates. Returns `None` when the point is behind the camera plane.
pub fn project_point(world: Vec3, view_proj: &Mat4, viewport: Viewport) -> Option<(f32, f32)> {
    let clip = *view_proj * Vec4::from((world, 1.0));
    if clip.w <= 0.0 {
        return None;
    }
    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    Some((
        ndc_x * viewport.width * 0.5,
        -ndc_y * viewport.height * 0.5,
    ))
}

/// Full per-frame computation for one anchor: projection plus distance fade.
/// `None` means the element should be hidden outright (behind the camera).
pub fn place_anchor(
    world: Vec3,
    camera_eye: Vec3,
    view_proj: &Mat4,
    viewport: Viewport,
    fade_threshold: f32,
) -> Option<ScreenPlacement> {
    let (x, y) = project_point(world, view_proj, viewport)?;
    let fade = distance_fade(camera_eye.distance(world), fade_threshold);
    Some(ScreenPlacement {
        x,
        y,
        opacity: fade.opacity,
        scale: fade.scale,
        interactive: fade.opacity > 0.0,
    })
}
