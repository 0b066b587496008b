//! Fixed-step time integrator for planets
//!
//! Semi-implicit Euler: the velocity is kicked first, then the position
//! drifts with the updated velocity. One force evaluation per step.

use super::forces::Acceleration;
use super::states::{Planet, Star};

/// Advance one planet by `dt` under the pull of `star`
/// Updates velocity, position and trail in place
pub fn euler_step<A: Acceleration + ?Sized>(planet: &mut Planet, star: &Star, forces: &A, dt: f64) {
    let a = forces.acceleration(star, planet.x);

    // Kick: v_n+1 = v_n + dt * a_n
    planet.v += a * dt;

    // Drift: x_n+1 = x_n + dt * v_n+1
    planet.x += planet.v * dt;

    planet.trail.push(planet.x);
}

impl Planet {
    /// One integration step toward `star`, see [`euler_step`]
    pub fn advance<A: Acceleration + ?Sized>(&mut self, star: &Star, forces: &A, dt: f64) {
        euler_step(self, star, forces, dt);
    }
}
