//! Flashmaster - a terminal flashcard study tool
//!
//! Loads question/answer decks from CSV files and lets you flip through
//! them, mark cards as learned, shuffle and hide what you already know.
//! Learned progress is kept in an embedded sled database between runs.
//!
//! # Layout
//!
//! - [`ingest`] - CSV tokenizing and column detection
//! - [`deck`] - card records and the navigable [`deck::DeckStore`]
//! - [`persist`] - the learned-set store
//! - [`session`] - the controller every user action goes through
//! - [`ui`] - the ratatui study screen and plain command output

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod deck;
pub mod ingest;
pub mod persist;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FlashmasterError {
    /// A CSV file could not be turned into a deck
    #[error("{0}")]
    Ingest(#[from] ingest::IngestError),
    /// The learned-progress database could not be opened
    #[error("Storage error: {0}")]
    Persistence(#[from] persist::PersistenceError),
    /// Terminal UI or prompt failure
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
