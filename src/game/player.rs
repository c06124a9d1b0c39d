//! Players and their two piles.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, Deck};
use crate::core::PlayerId;

/// A seated player: identity, name, hand and graveyard.
///
/// The `ai` flag only tells the display layer whether to wait for input
/// before this player places a card; the engine treats everyone alike.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Deck,
    graveyard: Deck,
    ai: bool,
}

impl Player {
    /// Create a computer-controlled player with empty piles.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(PlayerId::random(), name, true)
    }

    /// Create a player the display layer waits on.
    pub fn human(name: impl Into<String>) -> Self {
        Self::with_id(PlayerId::random(), name, false)
    }

    /// Create a player with an explicit identity.
    pub fn with_id(id: PlayerId, name: impl Into<String>, ai: bool) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Deck::new(),
            graveyard: Deck::new(),
            ai,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.ai
    }

    #[must_use]
    pub fn hand(&self) -> &Deck {
        &self.hand
    }

    #[must_use]
    pub fn graveyard(&self) -> &Deck {
        &self.graveyard
    }

    /// Mutable hand, for dealing and scripted setups.
    pub fn hand_mut(&mut self) -> &mut Deck {
        &mut self.hand
    }

    /// Mutable graveyard, for scripted setups.
    pub fn graveyard_mut(&mut self) -> &mut Deck {
        &mut self.graveyard
    }

    /// Cards held across hand and graveyard.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.graveyard.len()
    }

    /// Whether the player can still place a card.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        self.card_count() > 0
    }

    /// Draw the top card of the hand.
    ///
    /// An empty hand is refilled from the graveyard first, keeping the
    /// graveyard's order. Returns `None` only when both piles are empty.
    pub fn draw(&mut self) -> Option<Card> {
        if self.hand.is_empty() {
            if self.graveyard.is_empty() {
                return None;
            }
            self.hand = self.graveyard.take_all();
            debug!(player = %self.name, cards = self.hand.len(), "recycled graveyard into hand");
        }
        self.hand.draw()
    }

    /// Append cards to the graveyard in the given order.
    pub fn add_to_graveyard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.graveyard.extend(cards);
    }

    /// Read-only snapshot for rendering and standings.
    #[must_use]
    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            id: self.id,
            name: self.name.clone(),
            ai: self.ai,
            hand: self.hand.len(),
            graveyard: self.graveyard.len(),
        }
    }
}

/// Pile sizes for one player at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub ai: bool,
    pub hand: usize,
    pub graveyard: usize,
}

impl PlayerSummary {
    /// Cards held across hand and graveyard.
    #[must_use]
    pub fn total(&self) -> usize {
        self.hand + self.graveyard
    }
}
