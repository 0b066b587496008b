//! Core state types for the star/planet simulation.
//!
//! Defines the bodies the renderer draws:
//! - `Star`   the fixed attractor at the canvas centre
//! - `Planet` a user-spawned body with velocity and a bounded `Trail`
//!
//! Positions are canvas coordinates (origin top-left, y pointing down).

use std::collections::VecDeque;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Number of past positions a planet remembers for its trail
pub const TRAIL_CAPACITY: usize = 30;

/// 8-bit sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Parse a `#rrggbb` string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// The central attractor. Never moves and never changes mass.
#[derive(Debug, Clone)]
pub struct Star {
    position: NVec2,
    mass: f64,
    radius: f64, // display only
    color: Rgb,
}

impl Star {
    pub fn new(position: NVec2, mass: f64, radius: f64, color: Rgb) -> Self {
        Self { position, mass, radius, color }
    }

    /// Default star (mass 5000, radius 30, yellow) at the centre of a canvas
    pub fn centered(width: f64, height: f64) -> Self {
        Self::new(NVec2::new(width / 2.0, height / 2.0), 5000.0, 30.0, Rgb::YELLOW)
    }

    pub fn position(&self) -> NVec2 {
        self.position
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}

/// Bounded FIFO of recent positions, oldest first
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a position, evicting the oldest once over capacity
    pub fn push(&mut self, p: NVec2) {
        self.points.push_back(p);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    pub fn newest(&self) -> Option<&NVec2> {
        self.points.back()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(TRAIL_CAPACITY)
    }
}

#[derive(Debug, Clone)]
pub struct Planet {
    pub(crate) x: NVec2, // position
    pub(crate) v: NVec2, // velocity
    pub(crate) m: f64, // mass
    pub(crate) radius: f64, // display radius, derived from mass
    pub(crate) color: Rgb,
    pub(crate) trail: Trail,
}

impl Planet {
    /// Build a planet with an explicit initial state and an empty trail
    pub fn new(x: NVec2, v: NVec2, m: f64, color: Rgb) -> Self {
        Self {
            x,
            v,
            m,
            radius: radius_for_mass(m),
            color,
            trail: Trail::default(),
        }
    }

    /// Replace the (empty) trail with one of a different capacity
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail = Trail::with_capacity(capacity);
        self
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

/// Display radius for a planet of mass `m`: `max(4, floor(2 ln(m + 1)))`
pub fn radius_for_mass(m: f64) -> f64 {
    (2.0 * (m + 1.0).ln()).floor().max(4.0)
}

/// Size of the `i`-th oldest trail dot out of `len`: `max(1, floor(radius * i / len))`
///
/// Older dots are smaller, so the trail thins out toward its tail.
pub fn trail_dot_size(radius: f64, i: usize, len: usize) -> f64 {
    if len == 0 {
        return 1.0;
    }
    (radius * (i as f64 / len as f64)).floor().max(1.0)
}
