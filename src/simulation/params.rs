//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the fixed runtime settings:
//! - gravitational constant `G` (simplified, non-SI units),
//! - integration step `dt` applied once per frame,
//! - fallback distance used when a planet sits exactly on the star,
//! - trail capacity per planet

/// Simplified gravitational constant
pub const G: f64 = 6.67430e-1;

/// Distance substituted when a planet coincides with the star
pub const FALLBACK_DISTANCE: f64 = 0.01;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // step size per frame
    pub fallback_distance: f64, // stand-in for r when r == 0
    pub trail_capacity: usize, // positions kept per planet
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G,
            dt: 0.5,
            fallback_distance: FALLBACK_DISTANCE,
            trail_capacity: super::states::TRAIL_CAPACITY,
        }
    }
}
