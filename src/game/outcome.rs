//! Round and game outcomes reported to the display layer.

use serde::{Deserialize, Serialize};

use super::player::PlayerSummary;
use crate::core::PlayerId;

/// Where the round state machine currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Next round is played face up.
    ActiveRound,
    /// The last face-up round tied; next round is played face down.
    BurnRound,
    /// A face-up round was decided; the board awaits collection.
    Compared,
    /// The board was collected by a round winner.
    RoundResolved,
    /// Some player holds every card in the pool.
    GameOver,
}

/// What one call to `Game::step` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Face-up round decided; `winner` collected `cards` from the board.
    Won { winner: PlayerId, cards: usize },
    /// Face-up round tied; the next round burns.
    Tie,
    /// Face-down round placed; `pending` cards now wait on the board.
    Burned { pending: usize },
    /// Only one player could still place, so they took the stranded board.
    Settled { winner: PlayerId, cards: usize },
    /// Nothing left to play.
    Idle,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The player holds the entire card pool.
    Winner(PlayerId),
    /// The only player with cards, but short of the full pool (cards
    /// left undealt never come back).
    LastStanding(PlayerId),
    /// Every remaining card is stuck on the board.
    Stalemate,
    /// The configured round cap was reached first.
    RoundLimit,
}

impl GameResult {
    /// Check if a player won or is the last one standing.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) | GameResult::LastStanding(p) => *p == player,
            GameResult::Stalemate | GameResult::RoundLimit => false,
        }
    }
}

/// Final report from `Game::play_game`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub result: GameResult,
    pub rounds_played: u64,
    /// One entry per seated player, in seating order.
    pub players: Vec<PlayerSummary>,
}
