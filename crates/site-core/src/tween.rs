//! Timed interpolation polled from elapsed frame time. There are no timers;
//! the frame loop asks each tween where it is.

use crate::math::{ease_in_out_cubic, lerp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    CubicInOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::CubicInOut => ease_in_out_cubic(t),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration_sec: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_sec: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_sec,
            easing,
        }
    }

    /// Value at `elapsed_sec` since the tween started. Saturates at `to`,
    /// including for zero-duration tweens.
    pub fn sample(&self, elapsed_sec: f32) -> f32 {
        if self.duration_sec <= 0.0 || elapsed_sec >= self.duration_sec {
            return self.to;
        }
        let t = self.easing.apply(elapsed_sec / self.duration_sec);
        lerp(self.from, self.to, t)
    }
}
