//! Pure functions for scoring a hand of blackjack.

use crate::card::{Card, Rank};

/// The value of `cards` when every ace is counted as 1.
pub fn min_score(cards: &[Card]) -> u8 {
    cards.iter().map(|card| card.val()).sum()
}

/// The best total for `cards`. At most one ace is promoted to 11, and only when doing so does not bust the hand.
pub fn score(cards: &[Card]) -> u8 {
    let min = min_score(cards);
    if min <= 11 && cards.iter().any(|card| card.rank == Rank::Ace) {
        min + 10
    } else {
        min
    }
}

/// True when an ace in `cards` is currently being counted as 11.
pub fn is_soft(cards: &[Card]) -> bool {
    min_score(cards) != score(cards)
}

/// True for a natural, exactly two cards totaling 21.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == 21
}

pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > 21
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::card::Suit;

    fn hand(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Spades)).collect()
    }

    #[test]
    fn single_ace_is_promoted_when_it_fits() {
        let others = [
            vec![],
            vec![Rank::Two],
            vec![Rank::Four, Rank::Five],
            vec![Rank::King],
            vec![Rank::Two, Rank::Three, Rank::Five],
        ];
        for rest in others {
            let total: u8 = rest.iter().map(|r| r.val()).sum();
            let mut ranks = vec![Rank::Ace];
            ranks.extend(rest);
            let cards = hand(&ranks);
            assert_eq!(score(&cards), 11 + total);
            assert!(is_soft(&cards));
        }
    }

    #[test]
    fn ace_falls_back_to_one() {
        let cards = hand(&[Rank::Ace, Rank::Nine, Rank::Five]);
        assert_eq!(score(&cards), 15);
        assert!(!is_soft(&cards));
    }

    #[test]
    fn two_aces_never_both_count_eleven() {
        assert_eq!(score(&hand(&[Rank::Ace, Rank::Ace])), 12);
        assert_eq!(score(&hand(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
        assert_eq!(score(&hand(&[Rank::Ace, Rank::Ace, Rank::King])), 12);
        assert_eq!(
            score(&hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])),
            14
        );
    }

    #[test]
    fn blackjack_needs_exactly_two_cards() {
        assert!(is_blackjack(&hand(&[Rank::Ace, Rank::King])));
        assert!(is_blackjack(&hand(&[Rank::Queen, Rank::Ace])));
        assert!(!is_blackjack(&hand(&[Rank::Seven, Rank::Seven, Rank::Seven])));
        assert_eq!(score(&hand(&[Rank::Seven, Rank::Seven, Rank::Seven])), 21);
        assert!(!is_blackjack(&hand(&[Rank::King, Rank::Queen])));
    }

    #[test]
    fn empty_hand() {
        assert_eq!(score(&[]), 0);
        assert!(!is_soft(&[]));
        assert!(!is_blackjack(&[]));
        assert!(!is_bust(&[]));
    }

    #[test]
    fn face_cards_bust() {
        assert!(is_bust(&hand(&[Rank::King, Rank::Queen, Rank::Two])));
        assert!(!is_bust(&hand(&[Rank::King, Rank::Ace])));
    }
}
