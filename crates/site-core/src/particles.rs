//! Starfield data generation. Pure data, rendered by the web crate.

use crate::constants::{PARTICLE_BASE_SIZE, PARTICLE_SPIN_RATE, THEME_CYAN, THEME_VIOLET};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub color: [f32; 3],
    pub size: f32,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Distribute `count` particles uniformly in a cube of side `spread`
    /// centered on the origin. Deterministic for a given seed.
    pub fn generate(count: usize, spread: f32, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let half = spread * 0.5;
        let particles = (0..count)
            .map(|_| {
                let position = Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                );
                let color = if rng.gen_bool(0.5) {
                    THEME_CYAN
                } else {
                    THEME_VIOLET
                };
                let size = PARTICLE_BASE_SIZE * rng.gen_range(0.6..1.4);
                Particle {
                    position,
                    color,
                    size,
                }
            })
            .collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Slow rotation of the whole field about Y, negative so the stars drift the
/// opposite way to the camera glide.
#[inline]
pub fn spin_angle(elapsed_sec: f32) -> f32 {
    -elapsed_sec * PARTICLE_SPIN_RATE
}
