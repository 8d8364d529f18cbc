//! A blackjack engine. Deals rounds from a multi-deck shoe, runs the player's and the dealer's turns
//! through the `Strategy` trait and settles every hand against the dealer, keeping a running bankroll.
//!
//! ```no_run
//! use blackjack_lib::{DealerStrategy, Game, Options};
//!
//! let mut game = Game::new(Options::new().hands(10).decks(6).build());
//! // the dealer's own policy makes a serviceable, if unambitious, player
//! let bankroll = game.play(&mut DealerStrategy).unwrap();
//! println!("finished with {bankroll}");
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod payout;
pub mod round;
pub mod scoring;
pub mod strategy;

pub mod prelude {
    pub use crate::card::{Card, Rank, Suit};
    pub use crate::deck::Deck;
    pub use crate::error::{BlackjackGameError, IllegalMove};
    pub use crate::game::{Game, Options, OptionsBuilder};
    pub use crate::hand::Hand;
    pub use crate::payout::{settle, Outcome, Settlement};
    pub use crate::round::{Move, Phase, Round};
    pub use crate::strategy::{DealerStrategy, Strategy};
}

pub use prelude::*;
