//! Wheel-driven card carousel.
//!
//! A discrete state machine: `Idle` at a resting card, or `Transitioning`
//! between two cards while a pair of tweens runs. Wheel events that arrive
//! mid-transition are dropped, which is the only mutual-exclusion rule the
//! page has; it holds because every callback runs to completion on one thread.

use crate::constants::{CARD_FLIP_ANGLE, CARD_FLIP_DEPTH, CARD_TRANSITION_SEC, WHEEL_MIN_DELTA};
use crate::tween::{Easing, Tween};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one card")]
    NoCards,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// The pose the web layer maps onto a card element's style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub rotation_y: f32,
    pub z: f32,
    pub opacity: f32,
    pub visible: bool,
}

impl CardPose {
    pub const IDENTITY: CardPose = CardPose {
        rotation_y: 0.0,
        z: 0.0,
        opacity: 1.0,
        visible: true,
    };

    pub const HIDDEN: CardPose = CardPose {
        rotation_y: 0.0,
        z: 0.0,
        opacity: 0.0,
        visible: false,
    };
}

#[derive(Clone, Copy, Debug)]
enum State {
    Idle,
    Transitioning {
        from: usize,
        to: usize,
        direction: Direction,
        elapsed: f32,
    },
}

#[derive(Debug)]
pub struct Carousel {
    count: usize,
    current: usize,
    duration_sec: f32,
    state: State,
}

impl Carousel {
    pub fn new(count: usize) -> Result<Self, CarouselError> {
        Self::with_duration(count, CARD_TRANSITION_SEC)
    }

    pub fn with_duration(count: usize, duration_sec: f32) -> Result<Self, CarouselError> {
        if count == 0 {
            return Err(CarouselError::NoCards);
        }
        Ok(Self {
            count,
            current: 0,
            duration_sec,
            state: State::Idle,
        })
    }

    pub fn card_count(&self) -> usize {
        self.count
    }

    /// The resting index. During a transition this is still the card being
    /// left; it only advances once the arriving tween completes.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, State::Transitioning { .. })
    }

    /// Feed a wheel event. Returns whether a transition started. Events while
    /// animating, sub-threshold deltas, and moves past either end are no-ops.
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        if self.is_animating() || delta_y.abs() < WHEEL_MIN_DELTA {
            return false;
        }
        let (direction, to) = if delta_y > 0.0 {
            if self.current + 1 >= self.count {
                return false;
            }
            (Direction::Forward, self.current + 1)
        } else {
            if self.current == 0 {
                return false;
            }
            (Direction::Backward, self.current - 1)
        };
        log::debug!("[carousel] {} -> {}", self.current, to);
        self.state = State::Transitioning {
            from: self.current,
            to,
            direction,
            elapsed: 0.0,
        };
        true
    }

    /// Advance the in-flight transition by `dt_sec`. On completion the machine
    /// returns to `Idle` at the arrived card and the left card is hidden.
    pub fn tick(&mut self, dt_sec: f32) {
        if let State::Transitioning { to, elapsed, .. } = &mut self.state {
            *elapsed += dt_sec.max(0.0);
            let arrived = *to;
            let done = *elapsed >= self.duration_sec;
            if done {
                self.current = arrived;
                self.state = State::Idle;
            }
        }
    }

    /// Pose for card `index` this frame. At rest only the current card is
    /// visible; mid-transition exactly the leaving/arriving pair is.
    pub fn pose(&self, index: usize) -> CardPose {
        match self.state {
            State::Idle => {
                if index == self.current {
                    CardPose::IDENTITY
                } else {
                    CardPose::HIDDEN
                }
            }
            State::Transitioning {
                from,
                to,
                direction,
                elapsed,
            } => {
                let s = direction.sign();
                if index == from {
                    // Leaving: identity toward the mirrored exit pose, receding
                    // the way the arriving card came from.
                    CardPose {
                        rotation_y: self.channel(0.0, -s * CARD_FLIP_ANGLE, elapsed, Easing::CubicInOut),
                        z: self.channel(0.0, -s * CARD_FLIP_DEPTH, elapsed, Easing::CubicInOut),
                        opacity: self.channel(1.0, 0.0, elapsed, Easing::Linear),
                        visible: true,
                    }
                } else if index == to {
                    // Arriving: mirrored entry pose toward identity. Forward
                    // pulls the card up from depth, backward from in front.
                    CardPose {
                        rotation_y: self.channel(s * CARD_FLIP_ANGLE, 0.0, elapsed, Easing::CubicInOut),
                        z: self.channel(-s * CARD_FLIP_DEPTH, 0.0, elapsed, Easing::CubicInOut),
                        opacity: self.channel(0.0, 1.0, elapsed, Easing::Linear),
                        visible: true,
                    }
                } else {
                    CardPose::HIDDEN
                }
            }
        }
    }

    #[inline]
    fn channel(&self, from: f32, to: f32, elapsed: f32, easing: Easing) -> f32 {
        Tween::new(from, to, self.duration_sec, easing).sample(elapsed)
    }
}
