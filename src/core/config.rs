//! Game configuration and engine constants.
//!
//! The rules are fixed; configuration only covers reproducibility (the
//! shuffle seed) and how long `Game::play_game` may run.

use serde::{Deserialize, Serialize};

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can seat.
pub const MAX_PLAYERS: usize = 4;

/// Cards in one physical deck.
pub const CARDS_PER_DECK: usize = 52;

/// Default cap on rounds played by `Game::play_game`.
pub const DEFAULT_MAX_ROUNDS: u64 = 10_000;

/// Number of physical decks used for a roster of `player_count`.
///
/// 2-3 players share one deck, 4 players use two.
#[must_use]
pub const fn decks_for(player_count: usize) -> usize {
    1 + player_count.saturating_sub(1) / 2
}

/// Runtime configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Shuffle seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Round cap for `play_game`. `None` for unbounded.
    pub max_rounds: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the round cap (`None` for unbounded).
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: Option<u64>) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
