//! Flashcard records and decks
//!
//! A [`Deck`] is the ordered list of cards produced by ingestion. Its order
//! is the initial navigation order; it is only ever replaced wholesale (on
//! load) or reordered wholesale (on shuffle).
//!
//! The [`DeckStore`] owns the deck together with the learned set, the
//! hide-learned filter and the navigation cursor.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod store;

pub use store::{DeckStore, Progress};

/// Set of card ids the user has marked as learned
pub type LearnedSet = HashSet<String>;

/// A single question/answer card
///
/// Created during ingestion and immutable afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FlashcardRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl FlashcardRecord {
    /// Create a new record
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Ordered sequence of flashcards
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<FlashcardRecord>,
}

impl Deck {
    /// Create a deck from cards in navigation order
    #[must_use]
    pub const fn new(cards: Vec<FlashcardRecord>) -> Self {
        Self { cards }
    }

    /// Number of cards in the deck
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in navigation order
    #[must_use]
    pub fn cards(&self) -> &[FlashcardRecord] {
        &self.cards
    }

    /// Iterate over cards in navigation order
    pub fn iter(&self) -> std::slice::Iter<'_, FlashcardRecord> {
        self.cards.iter()
    }

    /// Look up a card by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FlashcardRecord> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [FlashcardRecord] {
        &mut self.cards
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a FlashcardRecord;
    type IntoIter = std::slice::Iter<'a, FlashcardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl FromIterator<FlashcardRecord> for Deck {
    fn from_iter<T: IntoIterator<Item = FlashcardRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_lookup() {
        let deck: Deck = vec![
            FlashcardRecord::new("a", "Q1", "A1"),
            FlashcardRecord::new("b", "Q2", "A2"),
        ]
        .into_iter()
        .collect();

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get("b").map(|c| c.question.as_str()), Some("Q2"));
        assert!(deck.get("missing").is_none());
    }

    #[test]
    fn test_empty_deck() {
        let deck = Deck::default();
        assert!(deck.is_empty());
        assert_eq!(deck.iter().count(), 0);
    }
}
