use crate::card::Rank;
use thiserror::Error;

/// A move that broke one of the rules of the table. Callers may re-prompt for another move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("can only split a hand with two cards, hand has {0}")]
    SplitCardCount(usize),
    #[error("both cards must have the same rank to split, found {0:?} and {1:?}")]
    SplitRankMismatch(Rank, Rank),
    #[error("can only double down on a hand with two cards, hand has {0}")]
    DoubleCardCount(usize),
    #[error("a bet of {0} is too large to double")]
    BetOverflow(u32),
    #[error("a split hand must be dealt a second card before standing")]
    IncompleteHand,
    #[error("the dealer cannot split")]
    DealerCannotSplit,
    #[error("the dealer cannot double down")]
    DealerCannotDouble,
    #[error("no hand is currently being played")]
    NoActiveTurn,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlackjackGameError {
    /// The hand went over 21. Expected during play, the driver treats it as a stand.
    #[error("hand score exceeded 21")]
    Bust,
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
    #[error("tried to draw from an empty shoe")]
    EmptyShoe,
}
