//! Burn the Cities: the round state machine and its participants.
//!
//! - Every round, each player with cards places the top of their hand
//! - Highest rank takes the board; suits never matter
//! - A tie "burns the cities": everyone adds a face-down card, and the next
//!   face-up round decides who takes the lot
//! - An empty hand is refilled from the graveyard; a player is out only
//!   when both are empty
//! - The game ends when one player holds every card
//!
//! Supports 2-4 players. Four players share two decks.

mod board;
mod engine;
mod outcome;
mod player;

pub use board::{Board, Placement};
pub use engine::{Game, GameBuilder};
pub use outcome::{GameResult, Phase, RoundOutcome, Standings};
pub use player::{Player, PlayerSummary};
