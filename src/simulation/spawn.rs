//! Spawning planets at click positions.
//!
//! Velocity, mass and colour are sampled from an injected RNG so a seeded
//! session (or a test) reproduces the same planets.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::simulation::states::{NVec2, Planet, Rgb};

/// Non-empty list of colours planets are drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct Palette(Vec<Rgb>);

impl Palette {
    /// `None` when `colors` is empty
    pub fn new(colors: Vec<Rgb>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self(colors))
        }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.0
    }

    /// Uniform pick
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        self.0[rng.gen_range(0..self.0.len())]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            Rgb(0x1f, 0x77, 0xb4),
            Rgb(0x2c, 0xa0, 0x2c),
            Rgb(0xd6, 0x27, 0x28),
            Rgb(0x94, 0x67, 0xbd),
            Rgb(0xff, 0x7f, 0x0e),
        ])
    }
}

/// Sampling ranges for new planets
#[derive(Debug, Clone)]
pub struct SpawnRanges {
    pub velocity: RangeInclusive<f64>, // per axis
    pub mass: RangeInclusive<f64>,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            velocity: -2.0..=2.0,
            mass: 5.0..=20.0,
        }
    }
}

impl Planet {
    /// New planet at `position` with random velocity, mass and colour
    pub fn spawn<R: Rng + ?Sized>(position: NVec2, palette: &Palette, ranges: &SpawnRanges, rng: &mut R) -> Self {
        let vx = rng.gen_range(ranges.velocity.clone());
        let vy = rng.gen_range(ranges.velocity.clone());
        let m = rng.gen_range(ranges.mass.clone());
        let color = palette.choose(rng);

        Planet::new(position, NVec2::new(vx, vy), m, color)
    }
}
