//! # burn-the-cities
//!
//! Round-resolution engine for "Burn the Cities", a War-style
//! trick-comparison card game for 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering, input or timing. A display layer calls
//!    into the engine to advance state and reads it back to draw.
//!
//! 2. **Synchronous**: Every call completes before the next one is issued.
//!    Nothing blocks, nothing runs in the background.
//!
//! 3. **Cards Move, Never Copy**: `Card` is neither `Copy` nor `Clone`.
//!    Each card sits in exactly one deck, hand, graveyard or board.
//!
//! 4. **Reproducible**: Shuffling uses a seeded ChaCha8 RNG; the seed is
//!    always recoverable from the game.
//!
//! ## Modules
//!
//! - `core`: Player identity, RNG, configuration and constants
//! - `cards`: Suits, cards and decks
//! - `game`: Players, board, round state machine and outcomes
//! - `error`: Construction errors

pub mod cards;
pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, PlayerId};

pub use crate::cards::{Card, Deck, Suit};

pub use crate::error::GameError;

pub use crate::game::{
    Board, Game, GameBuilder, GameResult, Phase, Placement, Player, PlayerSummary,
    RoundOutcome, Standings,
};
