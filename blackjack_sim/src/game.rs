//! Module that focuses on the simulation of a single game of blackjack. In otherwords,
//!  this module provides all the functionality needed to test a single game of blackjack for a given decision strategy.

pub mod player;
pub mod strategy;

pub mod prelude {
    pub use super::player::{parse_move, ConsolePlayer};
    pub use super::strategy::{BasicStrategy, DecisionStrategy, MimicDealer, PlayerStrategy};
    pub use super::{BlackjackGameSim, BlackjackSimulation};
}

use crate::stats::SimulationSummary;
use crate::SimulationError;
use blackjack_lib::{Game, Options};
use strategy::{DecisionStrategy, PlayerStrategy};

/// Trait for running a simulation without knowing which decision strategy is behind it.
pub trait BlackjackSimulation {
    /// Plays every configured hand and returns the accumulated summary.
    fn run(&mut self) -> Result<SimulationSummary, SimulationError>;
    /// The table rules the simulation plays under.
    fn options(&self) -> Options;
}

/// Struct that provides the functionality to simulate a game of blackjack using a specific decision strategy.
/// The player keeps a tally of its hands, the game keeps the bankroll.
pub struct BlackjackGameSim<D: DecisionStrategy> {
    game: Game,
    player: PlayerStrategy<D>,
}

impl<D: DecisionStrategy> BlackjackGameSim<D> {
    /// Associated method for building a new simulation, `seed` makes the shuffles reproducible.
    pub fn new(options: Options, player: PlayerStrategy<D>, seed: u64) -> BlackjackGameSim<D> {
        BlackjackGameSim {
            game: Game::with_seed(options, seed),
            player,
        }
    }
}

impl<D: DecisionStrategy> BlackjackSimulation for BlackjackGameSim<D> {
    fn run(&mut self) -> Result<SimulationSummary, SimulationError> {
        let winnings = self.game.play(&mut self.player)?;
        let mut summary = self.player.tally().clone();
        summary.winnings = winnings;
        Ok(summary)
    }

    fn options(&self) -> Options {
        self.game.options()
    }
}
