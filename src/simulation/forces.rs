//! Acceleration contributors for the star/planet engine
//!
//! Planets feel only the star. They do not attract each other and do not
//! pull on the star.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Star};

/// Source of acceleration on a point at `x` due to the star
pub trait Acceleration {
    fn acceleration(&self, star: &Star, x: NVec2) -> NVec2;
}

/// Inverse-square pull toward the star, no softening
///
/// When the point sits exactly on the star (`r2 == 0`) the distance is
/// replaced by `fallback_distance`. This is a numerical hack to avoid a
/// division by zero, not a collision response: the displacement is zero in
/// that case so the resulting acceleration is zero as well. Bodies passing
/// very close to (but not onto) the star still receive huge kicks and may fly
/// off to very large coordinates; nothing corrects for that.
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct InverseSquareGravity {
    pub G: f64, // gravitational constant
    pub fallback_distance: f64, // used for r when r2 == 0
}

impl InverseSquareGravity {
    pub fn from_parameters(params: &Parameters) -> Self {
        Self {
            G: params.G,
            fallback_distance: params.fallback_distance,
        }
    }
}

impl Default for InverseSquareGravity {
    fn default() -> Self {
        Self::from_parameters(&Parameters::default())
    }
}

impl Acceleration for InverseSquareGravity {
    fn acceleration(&self, star: &Star, x: NVec2) -> NVec2 {
        // displacement from the point to the star
        let d = star.position() - x;

        let mut r2 = d.dot(&d);
        let r = if r2 == 0.0 {
            r2 = self.fallback_distance * self.fallback_distance;
            self.fallback_distance
        } else {
            r2.sqrt()
        };

        // |a| = G M / r^2, along the unit vector d / r
        let a = self.G * star.mass() / r2;
        d.map(|c| a * c / r)
    }
}
