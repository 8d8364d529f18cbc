//! Settling a finished round against the dealer's hand.

use crate::card::Card;
use crate::hand::Hand;
use crate::scoring;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A natural paid at the blackjack multiplier.
    Blackjack,
    Win,
    Push,
    Loss,
}

impl Outcome {
    /// Compares a finished player hand against the dealer's final hand.
    pub fn resolve(hand: &Hand, dealer: &[Card]) -> Outcome {
        let dealer_blackjack = scoring::is_blackjack(dealer);
        let player_blackjack = hand.is_natural();
        let (player_score, dealer_score) = (hand.score(), scoring::score(dealer));

        if player_blackjack && dealer_blackjack {
            Outcome::Push
        } else if dealer_blackjack {
            Outcome::Loss
        } else if player_blackjack {
            Outcome::Blackjack
        } else if player_score > 21 {
            Outcome::Loss
        } else if dealer_score > 21 || player_score > dealer_score {
            Outcome::Win
        } else if player_score < dealer_score {
            Outcome::Loss
        } else {
            Outcome::Push
        }
    }

    /// The signed change to the bankroll for a hand with `bet` riding on it.
    /// Blackjack winnings are truncated toward zero.
    pub fn payout(&self, bet: u32, blackjack_payout: f64) -> i64 {
        let bet = bet as i64;
        match self {
            Outcome::Blackjack => (bet as f64 * blackjack_payout) as i64,
            Outcome::Win => bet,
            Outcome::Push => 0,
            Outcome::Loss => -bet,
        }
    }
}

/// The result of settling every player hand in a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub outcomes: Vec<Outcome>,
    pub delta: i64,
}

/// Resolves each of `hands` independently against `dealer` and sums the bankroll change.
pub fn settle(hands: &[Hand], dealer: &[Card], blackjack_payout: f64) -> Settlement {
    let mut outcomes = Vec::with_capacity(hands.len());
    let mut delta = 0;
    for hand in hands {
        let outcome = Outcome::resolve(hand, dealer);
        delta += outcome.payout(hand.bet, blackjack_payout);
        outcomes.push(outcome);
    }
    Settlement { outcomes, delta }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect()
    }

    fn hand(ranks: &[Rank], bet: u32) -> Hand {
        let mut hand = Hand::new(bet);
        hand.cards = cards(ranks);
        hand
    }

    #[test]
    fn blackjack_pays_multiplier() {
        let player = hand(&[Rank::Ace, Rank::King], 10);
        let dealer = cards(&[Rank::Nine, Rank::Nine]);
        let settlement = settle(&[player], &dealer, 1.5);
        assert_eq!(settlement.outcomes, vec![Outcome::Blackjack]);
        assert_eq!(settlement.delta, 15);
    }

    #[test]
    fn blackjack_payout_truncates() {
        assert_eq!(Outcome::Blackjack.payout(5, 1.5), 7);
        assert_eq!(Outcome::Blackjack.payout(5, 1.2), 6);
    }

    #[test]
    fn twenty_loses_to_three_card_twenty_one() {
        let player = hand(&[Rank::Ten, Rank::Ten], 10);
        let dealer = cards(&[Rank::Seven, Rank::Nine, Rank::Five]);
        assert_eq!(settle(&[player], &dealer, 1.5).delta, -10);
    }

    #[test]
    fn equal_scores_push() {
        let player = hand(&[Rank::Ten, Rank::Queen], 10);
        let dealer = cards(&[Rank::King, Rank::Jack]);
        let settlement = settle(&[player], &dealer, 1.5);
        assert_eq!(settlement.outcomes, vec![Outcome::Push]);
        assert_eq!(settlement.delta, 0);
    }

    #[test]
    fn naturals_on_both_sides_push() {
        let player = hand(&[Rank::Ace, Rank::Queen], 10);
        let dealer = cards(&[Rank::King, Rank::Ace]);
        assert_eq!(Outcome::resolve(&player, &dealer), Outcome::Push);
    }

    #[test]
    fn dealer_natural_beats_three_card_twenty_one() {
        let player = hand(&[Rank::Seven, Rank::Seven, Rank::Seven], 10);
        let dealer = cards(&[Rank::Ace, Rank::Jack]);
        assert_eq!(Outcome::resolve(&player, &dealer), Outcome::Loss);
    }

    #[test]
    fn player_bust_loses_even_when_dealer_busts() {
        let player = hand(&[Rank::Ten, Rank::Five, Rank::Nine], 10);
        let dealer = cards(&[Rank::Ten, Rank::Six, Rank::King]);
        assert_eq!(Outcome::resolve(&player, &dealer), Outcome::Loss);
    }

    #[test]
    fn dealer_bust_pays_even_money() {
        let player = hand(&[Rank::Ten, Rank::Two], 10);
        let dealer = cards(&[Rank::Ten, Rank::Six, Rank::King]);
        assert_eq!(settle(&[player], &dealer, 1.5).delta, 10);
    }

    #[test]
    fn split_twenty_one_is_not_a_natural() {
        let mut player = hand(&[Rank::Ace, Rank::King], 10);
        player.split = true;
        let dealer = cards(&[Rank::Ten, Rank::Nine]);
        assert_eq!(Outcome::resolve(&player, &dealer), Outcome::Win);
        assert_eq!(settle(&[player], &dealer, 1.5).delta, 10);
    }

    #[test]
    fn hands_settle_independently() {
        let hands = [
            hand(&[Rank::Ten, Rank::Nine], 10),
            hand(&[Rank::Ten, Rank::Six], 20),
            hand(&[Rank::Ten, Rank::Eight], 5),
        ];
        let dealer = cards(&[Rank::Ten, Rank::Eight]);
        let settlement = settle(&hands, &dealer, 1.5);
        assert_eq!(
            settlement.outcomes,
            vec![Outcome::Win, Outcome::Loss, Outcome::Push]
        );
        assert_eq!(settlement.delta, -10);
    }
}
