//! Testing utilities for flashmaster
//!
//! Provides a `TestStore` wrapper for a throwaway sled store, helpers for
//! writing CSV fixtures, and a logger that records what a test emits.
//!
//! Only available when compiled with `cfg(test)`.

use crate::deck::{Deck, FlashcardRecord};
use crate::persist::SledStore;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread::{self, ThreadId};
use tempfile::TempDir;

/// Temporary sled store location that is removed on drop
///
/// The store is opened on demand so tests can close and reopen it to
/// simulate an application restart.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    /// Create a fresh, empty store location
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Path of the sled database directory
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("learned.db")
    }

    /// Open the store
    ///
    /// # Panics
    /// Panics if the database cannot be opened.
    #[must_use]
    pub fn store(&self) -> SledStore {
        SledStore::open(self.path()).expect("Failed to open test store")
    }
}

/// Write `content` to `dir/name`, returning the full path
///
/// # Errors
/// Returns an `io::Error` if the file cannot be created or written.
pub fn write_file(dir: &Path, name: &str, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

/// Build a deck whose cards have the given ids
#[must_use]
pub fn deck_of(ids: &[&str]) -> Deck {
    ids.iter()
        .map(|id| FlashcardRecord::new(*id, format!("Question {id}"), format!("Answer {id}")))
        .collect()
}

/// Log record captured by [`captured_logs`]
#[derive(Debug, Clone)]
pub struct CapturedLog {
    pub level: Level,
    pub target: String,
    pub message: String,
}

struct CaptureLogger {
    records: Mutex<Vec<(ThreadId, CapturedLog)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let captured = CapturedLog {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if let Ok(mut records) = self.records.lock() {
            records.push((thread::current().id(), captured));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

/// Install the capturing logger (idempotent)
pub fn capture_logs() {
    if log::set_logger(&CAPTURE).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

/// Records logged so far from the calling thread
///
/// Tests run in parallel, so only the current thread's records are returned.
#[must_use]
pub fn captured_logs() -> Vec<CapturedLog> {
    let id = thread::current().id();
    CAPTURE.records.lock().map_or_else(
        |_| Vec::new(),
        |records| {
            records
                .iter()
                .filter(|(thread, _)| *thread == id)
                .map(|(_, log)| log.clone())
                .collect()
        },
    )
}
