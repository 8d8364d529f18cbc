//! The state machine for a single round of blackjack.
//!
//! A `Round` is created by `Round::deal` and moves forward through
//! `Phase::PlayerTurn`, `Phase::DealerTurn` and `Phase::HandOver`. Every transition
//! takes the round by mutable reference together with the shoe it draws from,
//! so independent games never share any state.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{BlackjackGameError, IllegalMove};
use crate::hand::Hand;
use crate::scoring;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    PlayerTurn,
    DealerTurn,
    HandOver,
}

/// The moves available to whoever is acting on the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Hit,
    Stand,
    Split,
    Double,
}

impl Move {
    /// Applies the move to `round`, drawing from `shoe` when needed.
    pub fn apply(self, round: &mut Round, shoe: &mut Deck) -> Result<(), BlackjackGameError> {
        match self {
            Move::Hit => round.hit(shoe),
            Move::Stand => round.stand(),
            Move::Split => round.split(),
            Move::Double => round.double(shoe),
        }
    }

    /// Checks whether the move is legal for a player hand holding `cards`, without changing anything.
    pub fn check(&self, cards: &[Card]) -> Result<(), IllegalMove> {
        match self {
            Move::Hit => Ok(()),
            Move::Stand if cards.len() < 2 => Err(IllegalMove::IncompleteHand),
            Move::Stand => Ok(()),
            Move::Split if cards.len() != 2 => Err(IllegalMove::SplitCardCount(cards.len())),
            Move::Split if cards[0].rank != cards[1].rank => {
                Err(IllegalMove::SplitRankMismatch(cards[0].rank, cards[1].rank))
            }
            Move::Split => Ok(()),
            Move::Double if cards.len() != 2 => Err(IllegalMove::DoubleCardCount(cards.len())),
            Move::Double => Ok(()),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Hit => "hit",
            Move::Stand => "stand",
            Move::Split => "split",
            Move::Double => "double down",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    phase: Phase,
    hand_idx: usize,
    player_hands: Vec<Hand>,
    dealer: Vec<Card>,
    bet: u32,
}

fn draw(shoe: &mut Deck) -> Result<Card, BlackjackGameError> {
    shoe.get_next_card().ok_or(BlackjackGameError::EmptyShoe)
}

impl Round {
    /// Deals two cards each to a single player hand and the dealer, alternating player then dealer.
    pub fn deal(bet: u32, shoe: &mut Deck) -> Result<Round, BlackjackGameError> {
        let mut hand = Hand::new(bet);
        let mut dealer = Vec::with_capacity(5);
        for _ in 0..2 {
            hand.cards.push(draw(shoe)?);
            dealer.push(draw(shoe)?);
        }

        Ok(Round {
            phase: Phase::PlayerTurn,
            hand_idx: 0,
            player_hands: vec![hand],
            dealer,
            bet,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the player hand being played, only meaningful during `Phase::PlayerTurn`.
    pub fn hand_idx(&self) -> usize {
        self.hand_idx
    }

    /// The bet placed before the deal.
    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    pub fn dealer_hand(&self) -> &[Card] {
        &self.dealer
    }

    pub fn dealer_up_card(&self) -> Card {
        self.dealer[0]
    }

    pub fn dealer_has_blackjack(&self) -> bool {
        scoring::is_blackjack(&self.dealer)
    }

    /// The cards of whoever is acting.
    ///
    /// # Panics
    /// When the round is over, there is no active hand to ask about.
    pub fn current_hand(&self) -> &[Card] {
        match self.phase {
            Phase::PlayerTurn => &self.player_hands[self.hand_idx].cards,
            Phase::DealerTurn => &self.dealer,
            Phase::HandOver => panic!("it isn't currently any player's turn"),
        }
    }

    fn current_hand_mut(&mut self) -> Result<&mut Vec<Card>, IllegalMove> {
        match self.phase {
            Phase::PlayerTurn => Ok(&mut self.player_hands[self.hand_idx].cards),
            Phase::DealerTurn => Ok(&mut self.dealer),
            Phase::HandOver => Err(IllegalMove::NoActiveTurn),
        }
    }

    /// Deals one card to the current hand. Returns `BlackjackGameError::Bust` if the hand went over 21,
    /// the turn is not advanced in that case.
    pub fn hit(&mut self, shoe: &mut Deck) -> Result<(), BlackjackGameError> {
        let hand = self.current_hand_mut()?;
        hand.push(draw(shoe)?);
        if scoring::is_bust(hand) {
            return Err(BlackjackGameError::Bust);
        }
        Ok(())
    }

    /// Ends the current hand. After the last player hand the dealer plays, after the dealer the round is over.
    pub fn stand(&mut self) -> Result<(), BlackjackGameError> {
        match self.phase {
            Phase::PlayerTurn => {
                Move::Stand.check(self.current_hand())?;
                self.hand_idx += 1;
                if self.hand_idx >= self.player_hands.len() {
                    self.phase = Phase::DealerTurn;
                }
                Ok(())
            }
            Phase::DealerTurn => {
                self.phase = Phase::HandOver;
                Ok(())
            }
            Phase::HandOver => Err(IllegalMove::NoActiveTurn.into()),
        }
    }

    /// Splits a pair into two hands, the second card moves to a new hand appended after the existing ones.
    pub fn split(&mut self) -> Result<(), BlackjackGameError> {
        match self.phase {
            Phase::PlayerTurn => (),
            Phase::DealerTurn => return Err(IllegalMove::DealerCannotSplit.into()),
            Phase::HandOver => return Err(IllegalMove::NoActiveTurn.into()),
        }

        let hand = &mut self.player_hands[self.hand_idx];
        Move::Split.check(&hand.cards)?;
        hand.split = true;
        let card = hand.cards.pop().ok_or(IllegalMove::SplitCardCount(0))?;
        let mut new_hand = Hand::new(hand.bet);
        new_hand.split = true;
        new_hand.cards.push(card);
        self.player_hands.push(new_hand);
        Ok(())
    }

    /// Doubles the bet on the current hand, deals exactly one card and ends the hand, busted or not.
    pub fn double(&mut self, shoe: &mut Deck) -> Result<(), BlackjackGameError> {
        match self.phase {
            Phase::PlayerTurn => (),
            Phase::DealerTurn => return Err(IllegalMove::DealerCannotDouble.into()),
            Phase::HandOver => return Err(IllegalMove::NoActiveTurn.into()),
        }

        // doubling ends the hand, so a doubled hand is never the current one again
        let hand = &mut self.player_hands[self.hand_idx];
        Move::Double.check(&hand.cards)?;
        hand.bet = hand
            .bet
            .checked_mul(2)
            .ok_or(IllegalMove::BetOverflow(hand.bet))?;
        hand.doubled = true;

        match self.hit(shoe) {
            Ok(()) | Err(BlackjackGameError::Bust) => self.stand(),
            Err(e) => Err(e),
        }
    }

    /// Consumes the round, returning the player's hands and the dealer's hand.
    pub fn into_hands(self) -> (Vec<Hand>, Vec<Card>) {
        (self.player_hands, self.dealer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::card::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Hearts)
    }

    /// Stacks a shoe so the player is dealt `player`, the dealer `dealer`, then `rest` in order.
    fn stacked(player: [Rank; 2], dealer: [Rank; 2], rest: &[Rank]) -> Deck {
        let mut cards = vec![
            Card::new(player[0], Suit::Diamonds),
            Card::new(dealer[0], Suit::Spades),
            Card::new(player[1], Suit::Clubs),
            Card::new(dealer[1], Suit::Spades),
        ];
        cards.extend(rest.iter().map(|&r| card(r)));
        Deck::from_cards(cards)
    }

    #[test]
    fn deal_alternates_player_and_dealer() {
        let mut shoe = stacked([Rank::Two, Rank::Three], [Rank::Four, Rank::Five], &[]);
        let round = Round::deal(10, &mut shoe).unwrap();
        assert_eq!(round.phase(), Phase::PlayerTurn);
        assert_eq!(round.hand_idx(), 0);
        assert_eq!(round.player_hands().len(), 1);
        assert_eq!(round.player_hands()[0].bet, 10);
        let ranks: Vec<Rank> = round.player_hands()[0].cards.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Two, Rank::Three]);
        let ranks: Vec<Rank> = round.dealer_hand().iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Four, Rank::Five]);
        assert_eq!(round.dealer_up_card().rank, Rank::Four);
        assert!(shoe.is_empty());
    }

    #[test]
    fn deal_from_short_shoe_fails() {
        let mut shoe = Deck::from_cards([card(Rank::Two), card(Rank::Three)]);
        assert_eq!(
            Round::deal(10, &mut shoe).unwrap_err(),
            BlackjackGameError::EmptyShoe
        );
    }

    #[test]
    fn hit_reports_bust() {
        let mut shoe = stacked(
            [Rank::King, Rank::Six],
            [Rank::Four, Rank::Five],
            &[Rank::Two, Rank::Nine],
        );
        let mut round = Round::deal(10, &mut shoe).unwrap();
        assert_eq!(round.hit(&mut shoe), Ok(()));
        assert_eq!(round.hit(&mut shoe), Err(BlackjackGameError::Bust));
        assert_eq!(round.current_hand().len(), 4);
        assert_eq!(round.phase(), Phase::PlayerTurn);
    }

    #[test]
    fn stand_moves_through_the_phases() {
        let mut shoe = stacked([Rank::King, Rank::Nine], [Rank::Four, Rank::Five], &[]);
        let mut round = Round::deal(10, &mut shoe).unwrap();
        round.stand().unwrap();
        assert_eq!(round.phase(), Phase::DealerTurn);
        assert_eq!(round.current_hand(), round.dealer_hand());
        round.stand().unwrap();
        assert_eq!(round.phase(), Phase::HandOver);
        assert_eq!(
            round.stand(),
            Err(BlackjackGameError::IllegalMove(IllegalMove::NoActiveTurn))
        );
        assert_eq!(
            round.hit(&mut shoe),
            Err(BlackjackGameError::IllegalMove(IllegalMove::NoActiveTurn))
        );
    }

    #[test]
    #[should_panic(expected = "it isn't currently any player's turn")]
    fn current_hand_after_round_panics() {
        let mut shoe = stacked([Rank::King, Rank::Nine], [Rank::Four, Rank::Five], &[]);
        let mut round = Round::deal(10, &mut shoe).unwrap();
        round.stand().unwrap();
        round.stand().unwrap();
        round.current_hand();
    }

    #[test]
    fn split_rejects_different_ranks() {
        let mut shoe = stacked([Rank::Seven, Rank::Eight], [Rank::Four, Rank::Five], &[]);
        let mut round = Round::deal(10, &mut shoe).unwrap();
        assert_eq!(
            round.split(),
            Err(BlackjackGameError::IllegalMove(
                IllegalMove::SplitRankMismatch(Rank::Seven, Rank::Eight)
            ))
        );
        assert_eq!(round.player_hands().len(), 1);
        assert_eq!(round.player_hands()[0].cards.len(), 2);
    }

    #[test]
    fn split_rejects_ten_and_king() {
        let mut shoe = stacked([Rank::Ten, Rank::King], [Rank::Four, Rank::Five], &[]);
        let mut round = Round::deal(10, &mut shoe).unwrap();
        assert!(matches!(
            round.split(),
            Err(BlackjackGameError::IllegalMove(IllegalMove::SplitRankMismatch(..)))
        ));
    }

    #[test]
    fn split_pair_makes_two_hands() {
        let mut shoe = stacked(
            [Rank::Eight, Rank::Eight],
            [Rank::Four, Rank::Five],
            &[Rank::Three, Rank::King],
        );
        let mut round = Round::deal(10, &mut shoe).unwrap();
        round.split().unwrap();

        let hands = round.player_hands();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0].cards, vec![Card::new(Rank::Eight, Suit::Diamonds)]);
        assert_eq!(hands[1].cards, vec![Card::new(Rank::Eight, Suit::Clubs)]);
        assert!(hands.iter().all(|h| h.bet == 10 && h.split));
        assert_eq!(round.hand_idx(), 0);

        // the first hand has to be completed before standing
        assert_eq!(
            round.stand(),
            Err(BlackjackGameError::IllegalMove(IllegalMove::IncompleteHand))
        );
        round.hit(&mut shoe).unwrap();
        round.stand().unwrap();
        assert_eq!(round.hand_idx(), 1);
        assert_eq!(round.current_hand().len(), 1);
        round.hit(&mut shoe).unwrap();
        round.stand().unwrap();
        assert_eq!(round.phase(), Phase::DealerTurn);

        let (hands, _) = round.into_hands();
        assert_eq!(hands[0].score(), 11);
        assert_eq!(hands[1].score(), 18);
    }

    #[test]
    fn split_needs_two_cards() {
        let mut shoe = stacked(
            [Rank::Eight, Rank::Eight],
            [Rank::Four, Rank::Five],
            &[Rank::Eight],
        );
        let mut round = Round::deal(10, &mut shoe).unwrap();
        round.hit(&mut shoe).unwrap_err();
        assert_eq!(
            round.split(),
            Err(BlackjackGameError::IllegalMove(IllegalMove::SplitCardCount(3)))
        );
    }

    #[test]
    fn double_doubles_bet_and_ends_hand() {
        let mut shoe = stacked(
            [Rank::Five, Rank::Six],
            [Rank::Seven, Rank::Nine],
            &[Rank::Two, Rank::Three],
        );
        let mut round = Round::deal(10, &mut shoe).unwrap();
        round.double(&mut shoe).unwrap();

        assert_eq!(round.phase(), Phase::DealerTurn);
        assert_eq!(shoe.len(), 1);
        let hand = &round.player_hands()[0];
        assert_eq!(hand.bet, 20);
        assert!(hand.doubled);
        assert_eq!(hand.cards.len(), 3);
        assert_eq!(hand.score(), 13);
        assert_eq!(round.bet(), 10);
    }

    #[test]
    fn double_ends_hand_even_on_bust() {
        let mut shoe = stacked(
            [Rank::Ten, Rank::Six],
            [Rank::Seven, Rank::Nine],
            &[Rank::King],
        );
        let mut round = Round::deal(10, &mut shoe).unwrap();
        assert_eq!(round.double(&mut shoe), Ok(()));
        assert_eq!(round.phase(), Phase::DealerTurn);
        assert!(round.player_hands()[0].is_bust());
    }

    #[test]
    fn double_needs_two_cards() {
        let mut shoe = stacked(
            [Rank::Two, Rank::Three],
            [Rank::Seven, Rank::Nine],
            &[Rank::Four, Rank::Five],
        );
        let mut round = Round::deal(10, &mut shoe).unwrap();
        round.hit(&mut shoe).unwrap();
        assert_eq!(
            round.double(&mut shoe),
            Err(BlackjackGameError::IllegalMove(IllegalMove::DoubleCardCount(3)))
        );
        assert_eq!(round.player_hands()[0].bet, 10);
        assert_eq!(shoe.len(), 1);
    }

    #[test]
    fn double_rejects_a_bet_that_cannot_be_doubled() {
        let bet = u32::MAX / 2 + 1;
        let mut shoe = stacked(
            [Rank::Five, Rank::Six],
            [Rank::Seven, Rank::Nine],
            &[Rank::Two],
        );
        let mut round = Round::deal(bet, &mut shoe).unwrap();
        assert_eq!(
            round.double(&mut shoe),
            Err(BlackjackGameError::IllegalMove(IllegalMove::BetOverflow(bet)))
        );
        let hand = &round.player_hands()[0];
        assert_eq!(hand.bet, bet);
        assert!(!hand.doubled);
        assert_eq!(hand.cards.len(), 2);
        assert_eq!(shoe.len(), 1);

        // the hand can still be played normally
        round.hit(&mut shoe).unwrap();
        round.stand().unwrap();
        assert_eq!(round.phase(), Phase::DealerTurn);
    }

    #[test]
    fn dealer_cannot_split_or_double() {
        let mut shoe = stacked([Rank::King, Rank::Nine], [Rank::Eight, Rank::Eight], &[]);
        let mut round = Round::deal(10, &mut shoe).unwrap();
        round.stand().unwrap();
        assert_eq!(
            Move::Split.apply(&mut round, &mut shoe),
            Err(BlackjackGameError::IllegalMove(IllegalMove::DealerCannotSplit))
        );
        assert_eq!(
            Move::Double.apply(&mut round, &mut shoe),
            Err(BlackjackGameError::IllegalMove(IllegalMove::DealerCannotDouble))
        );
    }

    #[test]
    fn check_moves_without_a_round() {
        let pair = [card(Rank::Nine), card(Rank::Nine)];
        assert_eq!(Move::Split.check(&pair), Ok(()));
        assert_eq!(Move::Double.check(&pair), Ok(()));
        assert_eq!(Move::Stand.check(&pair[..1]), Err(IllegalMove::IncompleteHand));
        assert_eq!(Move::Hit.check(&pair[..1]), Ok(()));
        assert_eq!(
            Move::Double.check(&[card(Rank::Two), card(Rank::Two), card(Rank::Two)]),
            Err(IllegalMove::DoubleCardCount(3))
        );
    }
}
