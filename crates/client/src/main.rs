//! Composition client binary.
//!
//! Composition root: reads the environment, sets up logging, builds the world
//! from a scenario and runs the terminal session on stdin/stdout.
//!
//! # Examples
//!
//! ```bash
//! # Stock arena with default rules
//! cargo run -p composition-client
//!
//! # Custom scenario and rules
//! COMPOSITION_SCENARIO=crates/game/content/data/arena.ron \
//! COMPOSITION_GAME_CONFIG=game.toml cargo run -p composition-client
//! ```

use std::io;

use anyhow::Result;
use composition_cli::{CliApp, CliConfig, logging};
use composition_content::{ConfigLoader, ScenarioLoader, ScenarioSpec};
use composition_core::{GameConfig, World};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    logging::setup_logging(&config)?;

    tracing::info!("Starting composition client");
    let world = build_world(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = CliApp::new(world, stdin.lock(), stdout.lock()).run()?;

    tracing::info!("Client shutdown complete: {:?}", end);
    Ok(())
}

fn build_world(config: &CliConfig) -> Result<World> {
    let game_config = match &config.game_config_path {
        Some(path) => {
            tracing::info!("Game config: {}", path.display());
            ConfigLoader::load(path)?
        }
        None => GameConfig::default(),
    };

    let scenario = match &config.scenario_path {
        Some(path) => {
            tracing::info!("Scenario: {}", path.display());
            ScenarioLoader::load(path)?
        }
        None => {
            tracing::debug!("No scenario configured, using the stock arena");
            ScenarioSpec::default_arena()
        }
    };

    Ok(scenario.build_world(game_config))
}
