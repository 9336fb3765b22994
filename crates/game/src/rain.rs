//! Rain field around the craft.
//!
//! A fixed pool of drops falls inside a box that rides along with the
//! craft. Drops that reach the ground respawn near the top of the box at
//! a fresh horizontal offset, which reads as endless rain from inside.

use glam::Vec3;
use rand::prelude::*;

/// One falling drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainDrop {
    pub position: Vec3,
    /// Fall speed, units/s.
    pub speed: f32,
}

/// The whole rain field.
#[derive(Debug)]
pub struct RainLayer {
    pub drops: Vec<RainDrop>,
    /// Constant lateral drift applied to every drop.
    pub wind: Vec3,
    /// Half extents in x/z, full height in y.
    range: Vec3,
    rng: StdRng,
}

impl RainLayer {
    pub const DEFAULT_COUNT: usize = 1200;
    pub const DEFAULT_RANGE: Vec3 = Vec3::new(120.0, 60.0, 120.0);
    pub const WIND: Vec3 = Vec3::new(5.0, 0.0, 2.0);

    pub fn new(seed: u64, center: Vec3) -> Self {
        Self::with_settings(seed, center, Self::DEFAULT_COUNT, Self::DEFAULT_RANGE)
    }

    pub fn with_settings(seed: u64, center: Vec3, count: usize, range: Vec3) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let drops = (0..count)
            .map(|_| RainDrop {
                position: center
                    + Vec3::new(
                        rng.gen_range(-range.x..range.x),
                        rng.gen_range(0.0..range.y),
                        rng.gen_range(-range.z..range.z),
                    ),
                speed: rng.gen_range(10.0..20.0),
            })
            .collect();
        Self {
            drops,
            wind: Self::WIND,
            range,
            rng,
        }
    }

    /// Advance every drop and respawn the ones that hit the ground.
    pub fn update(&mut self, dt: f32, center: Vec3) {
        let reset_height = center.y + self.range.y / 1.5;
        for drop in &mut self.drops {
            drop.position.y -= drop.speed * dt;
            drop.position.x += self.wind.x * dt;
            drop.position.z += self.wind.z * dt;

            if drop.position.y < 0.0 {
                drop.position = Vec3::new(
                    center.x + self.rng.gen_range(-self.range.x..self.range.x),
                    reset_height + self.rng.gen_range(0.0..20.0),
                    center.z + self.rng.gen_range(-self.range.z..self.range.z),
                );
            }
        }
    }

    /// Tail offset for streak rendering, slanted against the wind.
    pub fn streak_tail(&self) -> Vec3 {
        Vec3::new(-self.wind.x * 0.1, 0.5, -self.wind.z * 0.1)
    }
}
