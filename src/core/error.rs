use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// poker_rank library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerRankError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card value {0} is outside of 1..=13")]
    ValueOutOfRange(u8),
    #[error("Holdem hands must have exactly 2 cards, found {0}")]
    HandSize(usize),
    #[error("The board must have exactly 5 cards, found {0}")]
    BoardSize(usize),
    #[error("At least 5 cards are needed to score a hand, found {0}")]
    TooFewCards(usize),
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Not enough cards left in the deck")]
    DeckExhausted,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PokerRankError {
    /// Is this one of the errors raised for malformed
    /// hands, boards, or cards handed to the scorer?
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PokerRankError::ValueOutOfRange(_)
                | PokerRankError::HandSize(_)
                | PokerRankError::BoardSize(_)
                | PokerRankError::TooFewCards(_)
                | PokerRankError::DuplicateCard(_)
        )
    }
}
