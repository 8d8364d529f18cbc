use crate::card::Card;
use crate::scoring;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One of the player's hands and the bet riding on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub bet: u32,
    pub doubled: bool,
    pub split: bool,
}

impl Hand {
    pub fn new(bet: u32) -> Hand {
        Hand {
            cards: Vec::with_capacity(5),
            bet,
            doubled: false,
            split: false,
        }
    }

    pub fn score(&self) -> u8 {
        scoring::score(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        scoring::is_soft(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        scoring::is_bust(&self.cards)
    }

    /// A natural blackjack. Two cards totaling 21 after a split do not count.
    pub fn is_natural(&self) -> bool {
        !self.split && scoring::is_blackjack(&self.cards)
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "[{}] ({}) bet {}", cards, self.score(), self.bet)
    }
}
