//! Configuration types for loading a session from YAML.
//!
//! Only display and session settings live here. Physical constants (G, the
//! step size, the fallback distance, trail length) are fixed in
//! [`Parameters`](crate::simulation::params::Parameters) and are not
//! configurable.
//!
//! # YAML format
//!
//! ```yaml
//! window:
//!   title: "Simple Solar Simulator"
//!   width: 900              # canvas width in pixels
//!   height: 700             # canvas height in pixels
//!   background: "#000000"
//!
//! frame_interval_ms: 30     # one physics step per interval
//! seed: 42                  # optional, omit for a random session
//! palette: ["#1f77b4", "#2ca02c", "#d62728", "#9467bd", "#ff7f0e"]
//! ```
//!
//! Every field except `window.width` / `window.height` has a default.

use std::io::Read;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::simulation::spawn::Palette;
use crate::simulation::states::Rgb;

/// Canvas / window settings
#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    pub width: u32, // canvas width, the reset panel is added below it
    pub height: u32, // canvas height
    #[serde(default = "default_background")]
    pub background: String, // "#rrggbb"
}

/// Top-level session configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub window: WindowConfig,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64, // time between physics steps
    #[serde(default)]
    pub seed: Option<u64>, // RNG seed for spawned planets
    #[serde(default)]
    pub palette: Option<Vec<String>>, // planet colours, "#rrggbb"
}

fn default_title() -> String {
    "Simple Solar Simulator".to_string()
}

fn default_background() -> String {
    "#000000".to_string()
}

fn default_frame_interval_ms() -> u64 {
    30
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                title: default_title(),
                width: 900,
                height: 700,
                background: default_background(),
            },
            frame_interval_ms: default_frame_interval_ms(),
            seed: None,
            palette: None,
        }
    }
}

impl ScenarioConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s).context("invalid scenario YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate YAML from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader).context("invalid scenario YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.window.width > 0 && self.window.height > 0,
            "window size must be positive, got {}x{}", self.window.width, self.window.height);
        ensure!(self.frame_interval_ms > 0, "frame_interval_ms must be positive");
        self.background()?;
        self.palette()?;
        Ok(())
    }

    pub fn background(&self) -> Result<Rgb> {
        parse_color(&self.window.background)
    }

    /// Configured palette, or the default one when none is given
    pub fn palette(&self) -> Result<Palette> {
        let Some(hexes) = &self.palette else {
            return Ok(Palette::default());
        };
        let colors = hexes
            .iter()
            .map(|h| parse_color(h))
            .collect::<Result<Vec<_>>>()?;
        Palette::new(colors).context("palette must contain at least one colour")
    }
}

fn parse_color(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex).with_context(|| format!("invalid colour {hex:?}, expected \"#rrggbb\""))
}
