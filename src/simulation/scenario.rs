//! Build the runtime universe from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the `Universe`
//! resource holding:
//! - the star at the canvas centre
//! - the live set of planets, in creation order
//! - physics parameters and the gravity term built from them
//! - the spawn source (seeded RNG, sampling ranges, palette)
//!
//! The universe is inserted into Bevy as a `Resource`; the viewer calls
//! `spawn_planet`, `reset` and `step` and reads the bodies to draw them.

use anyhow::Result;
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::forces::InverseSquareGravity;
use crate::simulation::params::Parameters;
use crate::simulation::spawn::{Palette, SpawnRanges};
use crate::simulation::states::{NVec2, Planet, Star};

/// Ticks between progress log lines
const LOG_EVERY: u64 = 1000;

#[derive(Resource)]
pub struct Universe {
    star: Star,
    planets: Vec<Planet>, // no cap, grows with every click until reset
    parameters: Parameters,
    gravity: InverseSquareGravity,
    palette: Palette,
    ranges: SpawnRanges,
    rng: StdRng,
    ticks: u64,
}

impl Universe {
    pub fn new(star: Star, parameters: Parameters, palette: Palette, rng: StdRng) -> Self {
        let gravity = InverseSquareGravity::from_parameters(&parameters);
        Self {
            star,
            planets: Vec::new(),
            parameters,
            gravity,
            palette,
            ranges: SpawnRanges::default(),
            rng,
            ticks: 0,
        }
    }

    pub fn build_universe(cfg: &ScenarioConfig) -> Result<Self> {
        let star = Star::centered(cfg.window.width as f64, cfg.window.height as f64);

        // Seeded sessions replay the same planets for the same clicks
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let universe = Self::new(star, Parameters::default(), cfg.palette()?, rng);
        log::info!(
            "universe ready: {}x{} canvas, star at ({}, {}), seed {:?}",
            cfg.window.width, cfg.window.height,
            universe.star.position().x, universe.star.position().y,
            cfg.seed,
        );
        Ok(universe)
    }

    /// Spawn a planet at `position` and append it to the live set
    pub fn spawn_planet(&mut self, position: NVec2) -> &Planet {
        let planet = Planet::spawn(position, &self.palette, &self.ranges, &mut self.rng)
            .with_trail_capacity(self.parameters.trail_capacity);
        log::debug!(
            "spawned planet #{} at ({:.1}, {:.1}) v=({:.3}, {:.3}) m={:.2}",
            self.planets.len(), position.x, position.y, planet.v.x, planet.v.y, planet.m,
        );
        self.planets.push(planet);
        &self.planets[self.planets.len() - 1]
    }

    /// Drop every planet
    pub fn reset(&mut self) {
        log::info!("reset: cleared {} planets", self.planets.len());
        self.planets.clear();
    }

    /// Advance every planet once, in creation order
    pub fn step(&mut self) {
        let Universe { star, planets, parameters, gravity, .. } = self;
        for planet in planets.iter_mut() {
            planet.advance(&*star, &*gravity, parameters.dt);
        }

        self.ticks += 1;
        if self.ticks % LOG_EVERY == 0 {
            log::debug!("tick {}: {} planets", self.ticks, self.planets.len());
        }
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
