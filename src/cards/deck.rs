//! Ordered card collections.
//!
//! A `Deck` backs every pile in the game: the freshly built decks used for
//! dealing, and each player's hand and graveyard. Index 0 is the bottom,
//! the last index is the top; `draw` and `add` both work on the top.

use super::card::{Card, Suit, MAX_RANK, MIN_RANK};
use crate::core::{GameRng, CARDS_PER_DECK};

/// Ordered pile of cards.
#[derive(Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a full, unshuffled 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.build();
        deck
    }

    /// Replace the contents with one card per (suit, rank).
    ///
    /// Suit-major, rank-ascending: Two of Hearts at the bottom, Ace of
    /// Clubs on top.
    pub fn build(&mut self) {
        self.cards.clear();
        self.cards.reserve(CARDS_PER_DECK);
        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                self.cards.push(Card { suit, rank });
            }
        }
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card, or `None` if empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Put a card on top.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Move every card out, leaving this deck empty. Order is preserved.
    pub fn take_all(&mut self) -> Deck {
        std::mem::take(self)
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pairs(deck: &Deck) -> Vec<(Suit, u8)> {
        deck.iter().map(|c| (c.suit(), c.rank())).collect()
    }

    #[test]
    fn test_build() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 52);

        let unique: HashSet<_> = pairs(&deck).into_iter().collect();
        assert_eq!(unique.len(), 52);

        let order = pairs(&deck);
        assert_eq!(order[0], (Suit::Hearts, 2));
        assert_eq!(order[12], (Suit::Hearts, 14));
        assert_eq!(order[13], (Suit::Diamonds, 2));
        assert_eq!(order[51], (Suit::Clubs, 14));
    }

    #[test]
    fn test_build_replaces_contents() {
        let mut deck = Deck::new();
        deck.add(Card::new(Suit::Hearts, 9).unwrap());
        deck.build();
        deck.build();
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut deck = Deck::standard();
        let before = pairs(&deck);

        deck.shuffle(&mut GameRng::new(42));

        let mut after = pairs(&deck);
        assert_ne!(after, before);
        after.sort();
        let mut sorted_before = before;
        sorted_before.sort();
        assert_eq!(after, sorted_before);
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::new();
        deck.add(Card::new(Suit::Hearts, 3).unwrap());
        deck.add(Card::new(Suit::Spades, 8).unwrap());

        assert_eq!(deck.peek().map(Card::rank), Some(8));
        assert_eq!(deck.draw().map(|c| c.rank()), Some(8));
        assert_eq!(deck.draw().map(|c| c.rank()), Some(3));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_draw_empty() {
        let mut deck = Deck::new();
        assert!(deck.draw().is_none());
        assert!(deck.peek().is_none());
        assert_eq!(deck.len(), 0);
    }

    #[test]
    fn test_take_all() {
        let mut deck: Deck = [4, 5, 6]
            .into_iter()
            .map(|r| Card::new(Suit::Clubs, r).unwrap())
            .collect();

        let moved = deck.take_all();
        assert!(deck.is_empty());
        assert_eq!(moved.iter().map(Card::rank).collect::<Vec<_>>(), vec![4, 5, 6]);
    }
}
