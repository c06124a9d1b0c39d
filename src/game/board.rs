//! The shared board: cards placed this round plus any pending burn.
//!
//! Placements are appended in play order. Tie and winner checks look at a
//! trailing window (the most recent cycle), while collection takes the
//! whole board.

use serde::Serialize;

use crate::cards::Card;
use crate::core::PlayerId;

/// One card placed by one player.
#[derive(Debug, Serialize)]
pub struct Placement {
    pub player: PlayerId,
    pub card: Card,
    /// Placed face down during a burn round.
    pub hidden: bool,
}

/// Ordered placements awaiting resolution.
#[derive(Debug, Default, Serialize)]
pub struct Board {
    placements: Vec<Placement>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, player: PlayerId, card: Card, hidden: bool) {
        self.placements.push(Placement { player, card, hidden });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The last `size` placements, or `None` if the board is shorter.
    #[must_use]
    pub fn window(&self, size: usize) -> Option<&[Placement]> {
        let start = self.placements.len().checked_sub(size)?;
        Some(&self.placements[start..])
    }

    /// Whether every card in the trailing window matches the last card's rank.
    ///
    /// A window that is empty or longer than the board is never a tie.
    #[must_use]
    pub fn is_tie(&self, size: usize) -> bool {
        match self.window(size) {
            Some([rest @ .., last]) => rest.iter().all(|p| p.card == last.card),
            _ => false,
        }
    }

    /// Player who placed the highest card in the trailing window.
    ///
    /// The window is clamped to the board; the earliest of equal-highest
    /// cards wins.
    #[must_use]
    pub fn leader(&self, size: usize) -> Option<PlayerId> {
        let start = self.placements.len().saturating_sub(size);
        self.placements[start..]
            .iter()
            .reduce(|best, p| if p.card > best.card { p } else { best })
            .map(|p| p.player)
    }

    /// Remove every card in placement order, leaving the board empty.
    pub fn take_cards(&mut self) -> Vec<Card> {
        self.placements.drain(..).map(|p| p.card).collect()
    }
}
