//! Card system: suits, ranked cards and decks.
//!
//! ## Key Types
//!
//! - `Suit`: One of the four French suits
//! - `Card`: Validated (suit, rank), ordered by rank alone
//! - `Deck`: Ordered pile used for dealing, hands and graveyards

pub mod card;
pub mod deck;

pub use card::{Card, Suit, MAX_RANK, MIN_RANK};
pub use deck::Deck;
