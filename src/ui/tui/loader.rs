//! Background deck ingestion
//!
//! File reads and CSV parsing run on a worker thread so the event loop keeps
//! drawing. Results come back over a channel tagged with the ticket that
//! started them; the session decides whether a result is still wanted.

use crate::deck::Deck;
use crate::ingest::{self, IngestError};
use crate::session::IngestTicket;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// A finished ingestion attempt
#[derive(Debug)]
pub struct LoadResult {
    pub ticket: IngestTicket,
    pub path: PathBuf,
    pub result: Result<Deck, IngestError>,
}

/// Spawns ingestion workers and collects their results
pub struct IngestLoader {
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
}

impl Default for IngestLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl IngestLoader {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Start ingesting `path` on a worker thread
    pub fn spawn(&self, ticket: IngestTicket, path: PathBuf) {
        let tx = self.tx.clone();
        log::debug!("ingestion #{} started for {}", ticket.value(), path.display());
        thread::spawn(move || {
            let result = ingest::load_deck(&path);
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(LoadResult {
                ticket,
                path,
                result,
            });
        });
    }

    /// Next finished result, if any, without blocking
    #[must_use]
    pub fn try_next(&self) -> Option<LoadResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
