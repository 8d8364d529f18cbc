use crate::stats::SimulationSummary;
use blackjack_lib::scoring;
use blackjack_lib::{Card, Hand, Move, Outcome, Strategy};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt::Display;

/// What the lookup tables recommend. Doubling is only allowed on a two card hand,
/// so the tables also say what to fall back to when it isn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Play {
    Hit,
    Stand,
    Split,
    DoubleOrHit,
    DoubleOrStand,
}

lazy_static! {
    /// Keyed by (hand total, dealer's up card value), the up card value of an ace is 1.
    static ref HARD_TOTALS: HashMap<(u8, u8), Play> = build_hard_totals();
    /// Keyed by (hand total counting the ace as 1, dealer's up card value).
    static ref SOFT_TOTALS: HashMap<(u8, u8), Play> = build_soft_totals();
    /// Keyed by (value of one card of the pair, dealer's up card value), only holds the spots where a split is correct.
    static ref PAIR_SPLITS: HashMap<(u8, u8), Play> = build_pair_splits();
}

fn build_hard_totals() -> HashMap<(u8, u8), Play> {
    let mut hard_totals = HashMap::new();
    for i in 4..=21 {
        for j in 1..=10 {
            let play = match i {
                9 => match j {
                    3..=6 => Play::DoubleOrHit,
                    _ => Play::Hit,
                },
                10 => match j {
                    2..=9 => Play::DoubleOrHit,
                    _ => Play::Hit,
                },
                11 => Play::DoubleOrHit,
                12 => match j {
                    4..=6 => Play::Stand,
                    _ => Play::Hit,
                },
                13..=16 => match j {
                    2..=6 => Play::Stand,
                    _ => Play::Hit,
                },
                17..=21 => Play::Stand,
                _ => Play::Hit,
            };
            hard_totals.insert((i, j), play);
        }
    }
    hard_totals
}

fn build_soft_totals() -> HashMap<(u8, u8), Play> {
    let mut soft_totals = HashMap::new();
    for i in 2..=11 {
        for j in 1..=10 {
            let play = match i {
                // A,A only reaches this table when it cannot be split
                2 => Play::Hit,
                3 | 4 => match j {
                    5 | 6 => Play::DoubleOrHit,
                    _ => Play::Hit,
                },
                5 | 6 => match j {
                    4..=6 => Play::DoubleOrHit,
                    _ => Play::Hit,
                },
                7 => match j {
                    3..=6 => Play::DoubleOrHit,
                    _ => Play::Hit,
                },
                8 => match j {
                    2..=6 => Play::DoubleOrStand,
                    7 | 8 => Play::Stand,
                    _ => Play::Hit,
                },
                9 => match j {
                    6 => Play::DoubleOrStand,
                    _ => Play::Stand,
                },
                _ => Play::Stand,
            };
            soft_totals.insert((i, j), play);
        }
    }
    soft_totals
}

fn build_pair_splits() -> HashMap<(u8, u8), Play> {
    let mut pair_splits = HashMap::new();
    for i in 1..=10 {
        for j in 1..=10 {
            let split = match i {
                1 | 8 => true,
                2 | 3 | 7 => (2..=7).contains(&j),
                4 => j == 5 || j == 6,
                6 => (2..=6).contains(&j),
                9 => matches!(j, 2..=6 | 8 | 9),
                _ => false,
            };
            if split {
                pair_splits.insert((i, j), Play::Split);
            }
        }
    }
    pair_splits
}

/// Trait for a generic decision strategy, decides how to play a hand given the dealer's face up card.
/// Implementers only ever have to return moves that are legal for `hand`.
pub trait DecisionStrategy: Display {
    fn decide_option(&self, hand: &[Card], dealers_up_card: Card) -> Move;
}

/// Plays strict basic strategy for a shoe game where the dealer hits soft 17.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl BasicStrategy {
    pub fn new() -> BasicStrategy {
        BasicStrategy
    }
}

impl DecisionStrategy for BasicStrategy {
    fn decide_option(&self, hand: &[Card], dealers_up_card: Card) -> Move {
        // a split hand must be dealt its second card first
        if hand.len() < 2 {
            return Move::Hit;
        }
        let dealers_card = dealers_up_card.val();
        let can_double = Move::Double.check(hand).is_ok();

        if Move::Split.check(hand).is_ok()
            && PAIR_SPLITS.contains_key(&(hand[0].val(), dealers_card))
        {
            return Move::Split;
        }

        let play = if scoring::is_soft(hand) {
            SOFT_TOTALS.get(&(scoring::min_score(hand), dealers_card))
        } else {
            HARD_TOTALS.get(&(scoring::score(hand), dealers_card))
        };

        match play.copied().unwrap_or(Play::Stand) {
            Play::Hit => Move::Hit,
            Play::Stand => Move::Stand,
            Play::Split => Move::Split,
            Play::DoubleOrHit if can_double => Move::Double,
            Play::DoubleOrHit => Move::Hit,
            Play::DoubleOrStand if can_double => Move::Double,
            Play::DoubleOrStand => Move::Stand,
        }
    }
}

impl Display for BasicStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "basic strategy")
    }
}

/// Plays exactly like the house: hit 16 or less and soft 17. Never splits or doubles.
#[derive(Debug, Clone, Copy, Default)]
pub struct MimicDealer;

impl DecisionStrategy for MimicDealer {
    fn decide_option(&self, hand: &[Card], _dealers_up_card: Card) -> Move {
        let score = scoring::score(hand);
        if hand.len() < 2 || score <= 16 || (score == 17 && scoring::is_soft(hand)) {
            Move::Hit
        } else {
            Move::Stand
        }
    }
}

impl Display for MimicDealer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mimic the dealer")
    }
}

/// A scripted player, flat bets `bet` every round and plays with its decision strategy.
/// Keeps a tally of every finished hand for the simulation summary.
pub struct PlayerStrategy<D: DecisionStrategy> {
    decision_strategy: D,
    bet: u32,
    summary: SimulationSummary,
}

impl<D: DecisionStrategy> PlayerStrategy<D> {
    pub fn new(decision_strategy: D, bet: u32) -> PlayerStrategy<D> {
        let summary = SimulationSummary::new(decision_strategy.to_string());
        PlayerStrategy {
            decision_strategy,
            bet,
            summary,
        }
    }

    /// The tally recorded so far.
    pub fn tally(&self) -> &SimulationSummary {
        &self.summary
    }
}

impl<D: DecisionStrategy> Strategy for PlayerStrategy<D> {
    fn bet(&mut self, reshuffled: bool) -> u32 {
        if reshuffled {
            self.summary.reshuffles += 1;
        }
        self.bet
    }

    fn play(&mut self, hand: &[Card], dealer_up_card: Card) -> Move {
        self.decision_strategy.decide_option(hand, dealer_up_card)
    }

    fn summary(&mut self, hands: &[Hand], dealer: &[Card]) {
        self.summary.num_rounds += 1;
        for hand in hands {
            self.summary.hands_played += 1;
            match Outcome::resolve(hand, dealer) {
                Outcome::Blackjack => {
                    self.summary.wins += 1;
                    self.summary.player_blackjacks += 1;
                }
                Outcome::Win => self.summary.wins += 1,
                Outcome::Push => self.summary.pushes += 1,
                Outcome::Loss => self.summary.losses += 1,
            }
        }
    }
}
