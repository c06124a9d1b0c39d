//! Engine error type.
//!
//! Only construction can fail. Running out of cards is not an error: draws
//! return `None` and the caller branches on it.

use thiserror::Error;

use crate::core::PlayerId;

/// Validation failure raised by a constructor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Suit name is not one of Hearts, Diamonds, Spades, Clubs.
    #[error("invalid suit {0:?}")]
    InvalidSuit(String),

    /// Rank outside `2..=14`.
    #[error("invalid rank {0} (expected 2-14)")]
    InvalidRank(u8),

    /// Roster size outside the supported range.
    #[error("invalid player count {count} (expected {min}-{max})")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    /// Two roster entries share an identity.
    #[error("player {0} appears more than once")]
    DuplicatePlayer(PlayerId),
}
