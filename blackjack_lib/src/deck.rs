use crate::card::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// A shoe made of one or more standard 52 card decks. Cards are drawn from the front.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Associated method that builds an ordered shoe of `n_decks` standard decks.
    pub fn new(n_decks: u32) -> Deck {
        let mut cards = VecDeque::with_capacity(52 * n_decks as usize);
        for _ in 0..n_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push_back(Card::new(rank, suit));
                }
            }
        }
        Deck { cards }
    }

    /// Builds a shoe of `n_decks` decks and shuffles it with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(n_decks: u32, rng: &mut R) -> Deck {
        let mut deck = Deck::new(n_decks);
        deck.shuffle(rng);
        deck
    }

    /// A shoe that deals `cards` in the given order, mostly useful for stacking the deck in tests.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Deck {
        Deck {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    pub fn get_next_card(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
