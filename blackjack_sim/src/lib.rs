pub mod game;
pub mod stats;
pub mod write;

use blackjack_lib::{BlackjackGameError, Options};
use clap::ValueEnum;
use game::strategy::{BasicStrategy, MimicDealer, PlayerStrategy};
use game::{BlackjackGameSim, BlackjackSimulation};
use log::LevelFilter;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub mod prelude {
    pub use super::game::prelude::*;
    pub use super::stats::SimulationSummary;
    pub use super::write::{write_summary, OutputFormat};
    pub use super::{init_logging, BlackjackSimulatorConfig, DecisionKind, SimulationError};
    pub use blackjack_lib::prelude::*;
}

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("game error: {0}")]
    GameError(#[from] BlackjackGameError),
    #[error("write error: {0}")]
    WriteError(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("config error: {0}")]
    ConfigError(String),
}

/// The decision strategies a simulation can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    /// Strict basic strategy
    #[default]
    Basic,
    /// Play the dealer's own policy
    Dealer,
}

/// Struct for configuring a simulation. Deserializes from JSON with every field optional, e.g.
/// `{"options": {"hands": 1000, "decks": 6}, "bet": 5, "strategy": "basic"}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlackjackSimulatorConfig {
    pub options: Options,
    pub bet: u32,
    pub seed: Option<u64>,
    pub strategy: DecisionKind,
}

impl Default for BlackjackSimulatorConfig {
    /// Returns the standard configurations for a game of blackjack.
    fn default() -> Self {
        BlackjackSimulatorConfig {
            options: Options::default(),
            bet: 10,
            seed: None,
            strategy: DecisionKind::default(),
        }
    }
}

impl BlackjackSimulatorConfig {
    /// Reads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SimulationError::ConfigError(format!("unable to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            SimulationError::ConfigError(format!("unable to parse {}: {}", path.display(), e))
        })
    }

    /// Builds the configured simulation. Without a seed one is drawn at random and logged so the run can be repeated.
    pub fn simulation(&self) -> Box<dyn BlackjackSimulation> {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("{:<32}{:<32}", "using seed", seed);
        match self.strategy {
            DecisionKind::Basic => Box::new(BlackjackGameSim::new(
                self.options,
                PlayerStrategy::new(BasicStrategy::new(), self.bet),
                seed,
            )),
            DecisionKind::Dealer => Box::new(BlackjackGameSim::new(
                self.options,
                PlayerStrategy::new(MimicDealer, self.bet),
                seed,
            )),
        }
    }
}

/// Initialize terminal logging on stderr, stdout is left for the results.
pub fn init_logging(level: LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("unable to initialize logging: {e}");
    }
}
