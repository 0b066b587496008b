use starsim::{ScenarioConfig, Universe};
use starsim::run_2d;

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);

    ScenarioConfig::from_reader(reader)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml()?;

    let universe = Universe::build_universe(&scenario_cfg)?;
    run_2d(universe, &scenario_cfg)?;

    Ok(())
}
