//! Camera types shared with the web frontend.
//!
//! These intentionally avoid platform-specific APIs so they can be exercised
//! by host-side tests. The web frontend consumes them to build the matrices
//! that drive both the WebGPU starfield and the DOM projection bridge.

use crate::constants::{
    CAMERA_FOVY_RADIANS, CAMERA_HOME_Z, CAMERA_ZFAR, CAMERA_ZNEAR, SCROLL_LERP_FACTOR,
    SCROLL_OVERSHOOT_PX, SCROLL_RANGE_PX,
};
use crate::math::lerp;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera description.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// A camera at `eye` looking straight down -Z, the only orientation the
    /// portfolio scene uses.
    pub fn facing_forward(eye: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target: eye - Vec3::Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Scroll-synchronized camera depth.
///
/// Every scroll notification overwrites `target_z`; every frame `step` moves
/// `current_z` a constant fraction of the remaining distance, which gives the
/// glide the page is built around.
#[derive(Clone, Copy, Debug)]
pub struct ScrollCamera {
    pub current_z: f32,
    pub target_z: f32,
    pub smoothing: f32,
}

impl Default for ScrollCamera {
    fn default() -> Self {
        Self {
            current_z: CAMERA_HOME_Z,
            target_z: CAMERA_HOME_Z,
            smoothing: SCROLL_LERP_FACTOR,
        }
    }
}

impl ScrollCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a page scroll offset to a target camera depth. The offset is
    /// normalized against the scrollable distance of the virtual track.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32) {
        let scrollable = (SCROLL_RANGE_PX - viewport_height).max(1.0);
        let pct = (scroll_y / scrollable).clamp(0.0, 1.0);
        self.target_z = CAMERA_HOME_Z - pct * (SCROLL_RANGE_PX + SCROLL_OVERSHOOT_PX);
    }

    /// Advance one frame of smoothing.
    pub fn step(&mut self) {
        self.current_z = lerp(self.current_z, self.target_z, self.smoothing);
    }

    /// Jump straight to the target, used when motion smoothing is disabled.
    pub fn snap(&mut self) {
        self.current_z = self.target_z;
    }
}
