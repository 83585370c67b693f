//! Deck store and navigation controller
//!
//! Holds the loaded deck, the learned set, the hide-learned filter and the
//! cursor. The visible subset is always derived on demand, never stored, so
//! it cannot drift from the state it is computed from.
//!
//! # Cursor invariant
//!
//! When the visible subset is non-empty the cursor lies in `[0, n)`. Every
//! mutation that can shrink the subset re-clamps the cursor to `n - 1`.
//! When the subset is empty the cursor is inactive and [`DeckStore::current`]
//! returns `None`.

use super::{Deck, FlashcardRecord, LearnedSet};
use rand::Rng;

/// Position of the cursor within the visible subset, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// One-based position of the current card
    pub position: usize,
    /// Number of visible cards
    pub total: usize,
}

impl Progress {
    /// Fraction of the visible subset reached, in `[0.0, 1.0]`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.position as f64 / self.total as f64
        }
    }
}

/// Owned study state: deck, learned set, filter and cursor
#[derive(Debug, Clone, Default)]
pub struct DeckStore {
    deck: Deck,
    learned: LearnedSet,
    hide_learned: bool,
    cursor: usize,
}

impl DeckStore {
    /// Create an empty store with the given learned set
    #[must_use]
    pub fn with_learned(learned: LearnedSet) -> Self {
        Self {
            learned,
            ..Self::default()
        }
    }

    /// Replace the deck and reset the cursor. The learned set is untouched.
    pub fn load(&mut self, deck: Deck) {
        self.deck = deck;
        self.cursor = 0;
    }

    /// Reorder the deck with an unbiased Fisher-Yates shuffle
    ///
    /// Every one of the `n!` orderings is equally likely given a uniform
    /// `rng`. Resets the cursor to the first card.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cards = self.deck.cards_mut();
        for i in (1..cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            cards.swap(i, j);
        }
        self.cursor = 0;
    }

    /// Flip learned membership of `id`
    ///
    /// Returns `true` if the card is now learned. The cursor is not moved
    /// directly, but is re-clamped if hiding the card shrank the subset.
    pub fn toggle_learned(&mut self, id: &str) -> bool {
        let now_learned = if self.learned.remove(id) {
            false
        } else {
            self.learned.insert(id.to_string());
            true
        };
        self.clamp_cursor();
        now_learned
    }

    /// Set the hide-learned filter and re-clamp the cursor
    pub fn set_hide_learned(&mut self, hide: bool) {
        self.hide_learned = hide;
        self.clamp_cursor();
    }

    /// Advance to the next visible card, wrapping to the first
    pub fn next(&mut self) {
        let n = self.visible_len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % n;
    }

    /// Retreat to the previous visible card, wrapping to the last
    pub fn prev(&mut self) {
        let n = self.visible_len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor + n - 1) % n;
    }

    /// Clear the learned set and return to the first card
    pub fn reset_progress(&mut self) {
        self.learned.clear();
        self.cursor = 0;
    }

    /// Install a learned set (e.g. one restored from persistence)
    pub fn replace_learned(&mut self, learned: LearnedSet) {
        self.learned = learned;
        self.clamp_cursor();
    }

    /// Tear down all study state: deck, learned set and cursor
    pub fn clear(&mut self) {
        self.deck = Deck::default();
        self.learned.clear();
        self.cursor = 0;
    }

    /// Card under the cursor, or `None` when nothing is visible
    #[must_use]
    pub fn current(&self) -> Option<&FlashcardRecord> {
        self.visible_iter().nth(self.cursor)
    }

    /// The deck filtered by the hide-learned setting, in deck order
    #[must_use]
    pub fn visible(&self) -> Vec<&FlashcardRecord> {
        self.visible_iter().collect()
    }

    /// Number of visible cards
    #[must_use]
    pub fn visible_len(&self) -> usize {
        if self.hide_learned {
            self.visible_iter().count()
        } else {
            self.deck.len()
        }
    }

    /// Cursor position and visible total, or `None` when nothing is visible
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        let total = self.visible_len();
        (total > 0).then_some(Progress {
            position: self.cursor + 1,
            total,
        })
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub const fn learned(&self) -> &LearnedSet {
        &self.learned
    }

    #[must_use]
    pub const fn hide_learned(&self) -> bool {
        self.hide_learned
    }

    #[must_use]
    pub fn is_learned(&self, id: &str) -> bool {
        self.learned.contains(id)
    }

    /// Number of learned ids, including ids from previously loaded decks
    #[must_use]
    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    fn visible_iter(&self) -> impl Iterator<Item = &FlashcardRecord> {
        self.deck
            .iter()
            .filter(move |card| !self.hide_learned || !self.learned.contains(&card.id))
    }

    fn clamp_cursor(&mut self) {
        let n = self.visible_len();
        if n > 0 && self.cursor >= n {
            self.cursor = n - 1;
        }
    }
}
