pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Star, Planet, Trail, Rgb, NVec2, TRAIL_CAPACITY, radius_for_mass, trail_dot_size};
pub use simulation::forces::{Acceleration, InverseSquareGravity};
pub use simulation::integrator::euler_step;
pub use simulation::params::Parameters;
pub use simulation::spawn::{Palette, SpawnRanges};
pub use simulation::scenario::Universe;

pub use configuration::config::{ScenarioConfig, WindowConfig};

pub use visualization::starsim_vis2d::run_2d;
