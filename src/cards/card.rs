//! Playing cards.
//!
//! A `Card` is a validated (suit, rank) pair. Comparison looks at rank
//! only: the Five of Hearts equals the Five of Clubs, and suits never break
//! ties. Cards are deliberately neither `Copy` nor `Clone`; a card lives in
//! exactly one deck, hand, graveyard or board at a time and moves between
//! them.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Lowest rank (Two).
pub const MIN_RANK: u8 = 2;

/// Highest rank (Ace).
pub const MAX_RANK: u8 = 14;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// All suits in canonical deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Suit name as displayed.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| GameError::InvalidSuit(s.to_string()))
    }
}

/// A single playing card.
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    pub(super) suit: Suit,
    pub(super) rank: u8,
}

impl Card {
    /// Create a card, validating the rank.
    pub fn new(suit: Suit, rank: u8) -> Result<Self, GameError> {
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(GameError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Create a card from a suit name such as `"Spades"`.
    pub fn parse(suit: &str, rank: u8) -> Result<Self, GameError> {
        Self::new(suit.parse()?, rank)
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Rank in `2..=14` (11 Jack, 12 Queen, 13 King, 14 Ace).
    #[must_use]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Rank name: digits for 2-10, face names above.
    #[must_use]
    pub fn label(&self) -> Cow<'static, str> {
        match self.rank {
            11 => Cow::Borrowed("Jack"),
            12 => Cow::Borrowed("Queen"),
            13 => Cow::Borrowed("King"),
            14 => Cow::Borrowed("Ace"),
            n => Cow::Owned(n.to_string()),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.label(), self.suit)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// Unvalidated wire form; goes through `Card::new` on the way in.
#[derive(Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = GameError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.suit, raw.rank)
    }
}
