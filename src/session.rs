//! Study session controller
//!
//! The [`Session`] is the single owner of all study state. It wraps a
//! [`DeckStore`], the persistence backend and the shuffle random source, and
//! every user intent reaches it as an [`Action`] through
//! [`Session::dispatch`]. Handlers never capture state ahead of time; each
//! dispatch reads the store as it is at call time.
//!
//! # Ingestion ordering
//!
//! Reading and parsing a file happens off the event loop. Each attempt is
//! issued an [`IngestTicket`] by [`Session::begin_ingest`]; when the result
//! comes back through [`Session::complete_ingest`] only the most recently
//! issued ticket may commit a deck. A slower, earlier ingestion that finishes
//! late is discarded instead of clobbering the newer deck.

use crate::deck::{Deck, DeckStore, FlashcardRecord};
use crate::ingest::IngestError;
use crate::persist::LearnedStore;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No deck loaded; waiting for a file
    #[default]
    Upload,
    /// A deck is loaded and being studied
    Studying,
}

/// A user intent against the study state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    /// Toggle learned on the current card
    ToggleLearned,
    Shuffle,
    /// Clear all learned marks (caller is responsible for confirmation)
    ResetProgress,
    SetHideLearned(bool),
    ToggleHideLearned,
    /// Drop the deck and in-memory progress and go back to the upload screen
    ReturnToUpload,
}

/// Whether a dispatched action did anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    Ignored,
}

/// Sequence token identifying one ingestion attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IngestTicket(u64);

impl IngestTicket {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Result of handing an ingestion result to the session
#[derive(Debug)]
pub enum IngestOutcome {
    /// The deck was committed
    Loaded { cards: usize },
    /// The ingestion failed; the previous deck (if any) is still active
    Failed(IngestError),
    /// A newer ingestion was started since; the result was discarded
    Stale,
}

/// Owned study state plus its persistence and randomness collaborators
pub struct Session {
    store: DeckStore,
    persistence: Box<dyn LearnedStore>,
    rng: Box<dyn RngCore>,
    phase: Phase,
    latest_ticket: u64,
}

impl Session {
    /// Create a session, restoring the learned set from `persistence`
    #[must_use]
    pub fn new(persistence: Box<dyn LearnedStore>) -> Self {
        Self::with_rng(persistence, Box::new(StdRng::from_entropy()))
    }

    /// Create a session with an explicit shuffle random source
    #[must_use]
    pub fn with_rng(persistence: Box<dyn LearnedStore>, rng: Box<dyn RngCore>) -> Self {
        let learned = persistence.load();
        log::debug!("restored {} learned id(s)", learned.len());
        Self {
            store: DeckStore::with_learned(learned),
            persistence,
            rng,
            phase: Phase::Upload,
            latest_ticket: 0,
        }
    }

    /// Create a session whose shuffles are reproducible from `seed`
    #[must_use]
    pub fn seeded(persistence: Box<dyn LearnedStore>, seed: u64) -> Self {
        Self::with_rng(persistence, Box::new(StdRng::seed_from_u64(seed)))
    }

    /// Set the learned filter a deck starts with
    #[must_use]
    pub fn with_hide_learned(mut self, hide: bool) -> Self {
        self.store.set_hide_learned(hide);
        self
    }

    /// Apply an action to the current state
    ///
    /// Navigation and deck actions are ignored on the upload screen.
    /// Learned-set changes are persisted before returning.
    pub fn dispatch(&mut self, action: Action) -> ActionOutcome {
        if self.phase == Phase::Upload {
            log::debug!("ignoring {action:?} while no deck is loaded");
            return ActionOutcome::Ignored;
        }
        log::debug!("dispatch {action:?}");

        match action {
            Action::Next => self.store.next(),
            Action::Prev => self.store.prev(),
            Action::ToggleLearned => {
                let Some(id) = self.store.current().map(|card| card.id.clone()) else {
                    return ActionOutcome::Ignored;
                };
                self.store.toggle_learned(&id);
                self.persist_learned();
            }
            Action::Shuffle => self.store.shuffle(&mut *self.rng),
            Action::ResetProgress => {
                self.store.reset_progress();
                self.persist_learned();
                log::info!("learned progress reset");
            }
            Action::SetHideLearned(hide) => self.store.set_hide_learned(hide),
            Action::ToggleHideLearned => {
                let hide = !self.store.hide_learned();
                self.store.set_hide_learned(hide);
            }
            Action::ReturnToUpload => {
                self.store.clear();
                self.phase = Phase::Upload;
            }
        }
        ActionOutcome::Applied
    }

    /// Start an ingestion attempt, superseding any in flight
    pub fn begin_ingest(&mut self) -> IngestTicket {
        self.latest_ticket += 1;
        IngestTicket(self.latest_ticket)
    }

    /// Deliver the result of an ingestion attempt
    ///
    /// Only the most recently issued ticket can commit a deck. A failure
    /// leaves the current state untouched.
    pub fn complete_ingest(
        &mut self,
        ticket: IngestTicket,
        result: Result<Deck, IngestError>,
    ) -> IngestOutcome {
        if ticket.0 != self.latest_ticket {
            log::info!(
                "discarding stale ingestion #{} (latest is #{})",
                ticket.0,
                self.latest_ticket
            );
            return IngestOutcome::Stale;
        }

        match result {
            Ok(deck) => {
                let cards = deck.len();
                self.store.load(deck);
                self.phase = Phase::Studying;
                IngestOutcome::Loaded { cards }
            }
            Err(e) => IngestOutcome::Failed(e),
        }
    }

    /// Whether `ticket` is the most recent ingestion attempt
    #[must_use]
    pub const fn is_latest(&self, ticket: IngestTicket) -> bool {
        ticket.0 == self.latest_ticket
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_studying(&self) -> bool {
        self.phase == Phase::Studying
    }

    /// Read-only view of the study state
    #[must_use]
    pub const fn store(&self) -> &DeckStore {
        &self.store
    }

    /// Card under the cursor, or `None` when nothing is visible
    #[must_use]
    pub fn current(&self) -> Option<&FlashcardRecord> {
        self.store.current()
    }

    fn persist_learned(&self) {
        self.persistence.save(self.store.learned());
    }
}
