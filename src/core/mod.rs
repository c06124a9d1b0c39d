//! Core engine types: player identity, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{
    decks_for, GameConfig, CARDS_PER_DECK, DEFAULT_MAX_ROUNDS, MAX_PLAYERS, MIN_PLAYERS,
};
pub use player::PlayerId;
pub use rng::GameRng;
