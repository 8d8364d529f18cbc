use crate::card::Card;
use crate::hand::Hand;
use crate::round::Move;
use crate::scoring;

/// Trait for anything that can sit at the table, a scripted player, a human at a console, or the dealer.
/// The game driver asks for a bet before each round, a move at every decision and reports the finished hands at the end of the round.
pub trait Strategy {
    /// Returns the bet for the next round. `reshuffled` is true when the shoe was rebuilt just before this round.
    fn bet(&mut self, reshuffled: bool) -> u32;

    /// Decides how to play `hand` given the dealer's face up card.
    fn play(&mut self, hand: &[Card], dealer_up_card: Card) -> Move;

    /// Called once per round with every finished player hand and the dealer's final hand.
    fn summary(&mut self, hands: &[Hand], dealer: &[Card]);
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn bet(&mut self, reshuffled: bool) -> u32 {
        (**self).bet(reshuffled)
    }

    fn play(&mut self, hand: &[Card], dealer_up_card: Card) -> Move {
        (**self).play(hand, dealer_up_card)
    }

    fn summary(&mut self, hands: &[Hand], dealer: &[Card]) {
        (**self).summary(hands, dealer)
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn bet(&mut self, reshuffled: bool) -> u32 {
        (**self).bet(reshuffled)
    }

    fn play(&mut self, hand: &[Card], dealer_up_card: Card) -> Move {
        (**self).play(hand, dealer_up_card)
    }

    fn summary(&mut self, hands: &[Hand], dealer: &[Card]) {
        (**self).summary(hands, dealer)
    }
}

/// The house policy: hit on 16 or less and on soft 17, stand otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealerStrategy;

impl Strategy for DealerStrategy {
    fn bet(&mut self, _reshuffled: bool) -> u32 {
        0
    }

    fn play(&mut self, hand: &[Card], _dealer_up_card: Card) -> Move {
        let score = scoring::score(hand);
        if score <= 16 || (score == 17 && scoring::is_soft(hand)) {
            Move::Hit
        } else {
            Move::Stand
        }
    }

    fn summary(&mut self, _hands: &[Hand], _dealer: &[Card]) {}
}
