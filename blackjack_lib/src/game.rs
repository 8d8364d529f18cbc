//! The game driver. Plays a configured number of rounds between a player strategy and the dealer,
//! managing the shoe and keeping the player's bankroll between rounds.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::BlackjackGameError;
use crate::payout::{self, Settlement};
use crate::round::{Move, Phase, Round};
use crate::strategy::{DealerStrategy, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// The table rules for a game. Build with `Options::new()`, any value that is out of range is replaced by its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "OptionsBuilder")]
pub struct Options {
    /// Number of rounds played by `Game::play`, at least 1.
    pub hands: u32,
    /// Number of 52 card decks in the shoe, at least 1.
    pub decks: u32,
    /// Multiplier paid on a natural blackjack, greater than 1.
    pub blackjack_payout: f64,
}

impl Options {
    pub const DEFAULT_HANDS: u32 = 100;
    pub const DEFAULT_DECKS: u32 = 3;
    pub const DEFAULT_BLACKJACK_PAYOUT: f64 = 1.5;

    /// Associated method for returning a new `OptionsBuilder`.
    pub fn new() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// The shoe is rebuilt before a round whenever fewer cards than this remain.
    pub fn reshuffle_threshold(&self) -> usize {
        52 * self.decks as usize / 3
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::new().build()
    }
}

/// Struct to implement the builder pattern for `Options`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct OptionsBuilder {
    hands: Option<u32>,
    decks: Option<u32>,
    blackjack_payout: Option<f64>,
}

impl OptionsBuilder {
    /// Sets the number of rounds that will be played.
    pub fn hands(&mut self, hands: u32) -> &mut Self {
        self.hands = Some(hands);
        self
    }

    /// Sets the number of decks used to build the shoe.
    pub fn decks(&mut self, decks: u32) -> &mut Self {
        self.decks = Some(decks);
        self
    }

    /// Sets the payout multiplier for a natural blackjack.
    pub fn blackjack_payout(&mut self, payout: f64) -> &mut Self {
        self.blackjack_payout = Some(payout);
        self
    }

    pub fn build(&mut self) -> Options {
        Options {
            hands: self
                .hands
                .filter(|&n| n >= 1)
                .unwrap_or(Options::DEFAULT_HANDS),
            decks: self
                .decks
                .filter(|&n| n >= 1)
                .unwrap_or(Options::DEFAULT_DECKS),
            blackjack_payout: self
                .blackjack_payout
                .filter(|&p| p.is_finite() && p > 1.0)
                .unwrap_or(Options::DEFAULT_BLACKJACK_PAYOUT),
        }
    }
}

impl From<OptionsBuilder> for Options {
    fn from(mut builder: OptionsBuilder) -> Self {
        builder.build()
    }
}

/// A single game instance. Owns the shoe and the player's running bankroll, nothing is shared between instances.
pub struct Game {
    opts: Options,
    shoe: Deck,
    balance: i64,
    reshuffles: u32,
    /// Set when the shoe ran dry mid-round, reported with the next bet.
    reshuffle_pending: bool,
    dealer: DealerStrategy,
    rng: StdRng,
}

impl Game {
    /// Associated method for creating a new game, the shoe is shuffled from system entropy.
    pub fn new(opts: Options) -> Game {
        Game::with_rng(opts, StdRng::from_entropy())
    }

    /// Creates a game whose shuffles are reproducible from `seed`.
    pub fn with_seed(opts: Options, seed: u64) -> Game {
        Game::with_rng(opts, StdRng::seed_from_u64(seed))
    }

    fn with_rng(opts: Options, rng: StdRng) -> Game {
        Game {
            opts,
            shoe: Deck::default(),
            balance: 0,
            reshuffles: 0,
            reshuffle_pending: false,
            dealer: DealerStrategy,
            rng,
        }
    }

    /// Creates a game that deals from `shoe` until it runs under the reshuffle threshold.
    pub fn with_shoe(opts: Options, shoe: Deck, seed: u64) -> Game {
        let mut game = Game::with_seed(opts, seed);
        game.shoe = shoe;
        game
    }

    pub fn options(&self) -> Options {
        self.opts
    }

    /// The player's net winnings so far.
    pub fn bankroll(&self) -> i64 {
        self.balance
    }

    /// The number of times the shoe has been rebuilt.
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Plays `self.options().hands` rounds against `player` and returns the final bankroll.
    /// Any error other than a bust stops the game and is returned to the caller.
    pub fn play<S: Strategy + ?Sized>(&mut self, player: &mut S) -> Result<i64, BlackjackGameError> {
        log::info!(
            "{:<32}{:<32}",
            "playing hands",
            format!("{} ({} decks)", self.opts.hands, self.opts.decks)
        );
        for _ in 0..self.opts.hands {
            self.play_round(player)?;
        }
        log::info!("{:<32}{:<32}", "final bankroll", self.balance);
        Ok(self.balance)
    }

    /// Plays a single round: bet, deal, the player's turn, the dealer's turn and the payout.
    pub fn play_round<S: Strategy + ?Sized>(
        &mut self,
        player: &mut S,
    ) -> Result<Settlement, BlackjackGameError> {
        let reshuffled = self.reshuffle_if_needed();
        let bet = player.bet(reshuffled);
        let mut round = Round::deal(bet, &mut self.shoe)?;
        log::debug!(
            "{:<32}{:<32}",
            "dealt",
            format!("{} against {}", round.player_hands()[0], round.dealer_up_card())
        );

        if round.dealer_has_blackjack() {
            log::debug!("dealer has blackjack");
            return Ok(self.end_round(round, player));
        }

        while round.phase() == Phase::PlayerTurn {
            let hand = round.current_hand().to_vec();
            let mv = player.play(&hand, round.dealer_up_card());
            log::trace!("player {} on hand #{}", mv, round.hand_idx());
            self.apply(&mut round, mv)?;
        }

        while round.phase() == Phase::DealerTurn {
            let hand = round.current_hand().to_vec();
            let mv = self.dealer.play(&hand, Card::placeholder());
            log::trace!("dealer {}", mv);
            self.apply(&mut round, mv)?;
        }

        Ok(self.end_round(round, player))
    }

    /// Applies a move, turning a bust into a stand. A shoe emptied mid-round is rebuilt before a move that draws.
    fn apply(&mut self, round: &mut Round, mv: Move) -> Result<(), BlackjackGameError> {
        if matches!(mv, Move::Hit | Move::Double) && self.shoe.is_empty() {
            self.rebuild_shoe();
            self.reshuffle_pending = true;
        }
        match mv.apply(round, &mut self.shoe) {
            Err(BlackjackGameError::Bust) => round.stand(),
            result => result,
        }
    }

    /// Rebuilds the shoe if it has run under the threshold. Returns true if it did,
    /// or if it was rebuilt during the previous round.
    fn reshuffle_if_needed(&mut self) -> bool {
        let rebuilt_mid_round = std::mem::take(&mut self.reshuffle_pending);
        if self.shoe.len() >= self.opts.reshuffle_threshold() {
            return rebuilt_mid_round;
        }
        self.rebuild_shoe();
        true
    }

    fn rebuild_shoe(&mut self) {
        self.shoe = Deck::shuffled(self.opts.decks, &mut self.rng);
        self.reshuffles += 1;
        log::info!("{:<32}{:<32}", "rebuilt shoe", self.shoe.len());
    }

    fn end_round<S: Strategy + ?Sized>(&mut self, round: Round, player: &mut S) -> Settlement {
        let (hands, dealer) = round.into_hands();
        let settlement = payout::settle(&hands, &dealer, self.opts.blackjack_payout);
        self.balance += settlement.delta;
        log::debug!(
            "{:<32}{:<32}",
            "settled",
            format!("{:?} delta {} bankroll {}", settlement.outcomes, settlement.delta, self.balance)
        );
        player.summary(&hands, &dealer);
        settlement
    }
}
