//! Learned-set persistence
//!
//! The learned set is stored as a single key-value entry: key
//! [`LEARNED_KEY`], value a JSON array of card ids. Order within the array
//! carries no meaning; ids are written sorted so the stored value is stable.
//!
//! Persistence is never fatal inside a study session. `save` failures are
//! logged and dropped, and `load` falls back to an empty set when the stored value is missing or
//! corrupted.
//!
//! Two stores are provided:
//! - [`SledStore`]: durable, backed by a sled database on disk
//! - [`MemoryStore`]: in-process, for tests and ephemeral sessions

use crate::deck::LearnedSet;
use sled::Db;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

pub mod error;

pub use error::PersistenceError;

/// Fixed storage key for the learned set
pub const LEARNED_KEY: &str = "flashmaster_learned";

/// Durable home for the learned set
pub trait LearnedStore {
    /// Persist the learned set, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the value cannot be encoded or written.
    fn try_save(&self, ids: &LearnedSet) -> Result<(), PersistenceError>;

    /// Persist the learned set, logging instead of returning failures
    fn save(&self, ids: &LearnedSet) {
        if let Err(e) = self.try_save(ids) {
            log::warn!("failed to save learned set: {e}");
        }
    }

    /// Restore the learned set
    ///
    /// Returns an empty set if nothing is stored or the stored value is
    /// unreadable.
    fn load(&self) -> LearnedSet;
}

/// Serialize a learned set to its stored JSON form
///
/// # Errors
///
/// Returns `PersistenceError::Json` if serialization fails.
pub fn encode(ids: &LearnedSet) -> Result<Vec<u8>, PersistenceError> {
    let mut sorted: Vec<&String> = ids.iter().collect();
    sorted.sort();
    Ok(serde_json::to_vec(&sorted)?)
}

/// Parse a stored JSON array back into a learned set
///
/// # Errors
///
/// Returns `PersistenceError::Json` if the bytes are not a JSON array of strings.
pub fn decode(bytes: &[u8]) -> Result<LearnedSet, PersistenceError> {
    let ids: Vec<String> = serde_json::from_slice(bytes)?;
    Ok(ids.into_iter().collect())
}

fn decode_or_empty(bytes: Option<&[u8]>) -> LearnedSet {
    match bytes.map(decode) {
        None => LearnedSet::new(),
        Some(Ok(ids)) => ids,
        Some(Err(e)) => {
            log::warn!("discarding corrupted learned set under '{LEARNED_KEY}': {e}");
            LearnedSet::new()
        }
    }
}

/// sled-backed learned-set store
///
/// Cloning is cheap and clones share the same database handle.
#[derive(Clone)]
pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Open or create the store at `path`
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Sled` if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Store raw bytes under the learned key, bypassing encoding
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Sled` if the write fails.
    pub fn put_raw(&self, bytes: &[u8]) -> Result<(), PersistenceError> {
        self.db.insert(LEARNED_KEY, bytes)?;
        self.db.flush()?;
        Ok(())
    }
}

impl LearnedStore for SledStore {
    fn try_save(&self, ids: &LearnedSet) -> Result<(), PersistenceError> {
        let value = encode(ids)?;
        self.db.insert(LEARNED_KEY, value)?;
        self.db.flush()?;
        Ok(())
    }

    fn load(&self) -> LearnedSet {
        match self.db.get(LEARNED_KEY) {
            Ok(value) => decode_or_empty(value.as_deref()),
            Err(e) => {
                log::warn!("failed to read learned set: {e}");
                LearnedSet::new()
            }
        }
    }
}

/// In-process learned-set store
///
/// Clones share the same underlying map, so a test can keep a handle while
/// the session owns another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes under the learned key, bypassing encoding
    pub fn put_raw(&self, bytes: &[u8]) {
        self.entries
            .borrow_mut()
            .insert(LEARNED_KEY.to_string(), bytes.to_vec());
    }

    /// Raw bytes stored under the learned key, if any
    #[must_use]
    pub fn get_raw(&self) -> Option<Vec<u8>> {
        self.entries.borrow().get(LEARNED_KEY).cloned()
    }
}

impl LearnedStore for MemoryStore {
    fn try_save(&self, ids: &LearnedSet) -> Result<(), PersistenceError> {
        self.put_raw(&encode(ids)?);
        Ok(())
    }

    fn load(&self) -> LearnedSet {
        decode_or_empty(self.entries.borrow().get(LEARNED_KEY).map(Vec::as_slice))
    }
}
