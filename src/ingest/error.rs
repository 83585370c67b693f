//! Ingestion error types
//!
//! Every variant is terminal for the ingestion attempt that produced it and
//! carries a message suitable for showing to the user directly. A failed
//! ingestion never commits a partial deck.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a CSV file into a deck
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input could not be tokenized as tabular data and produced no rows
    #[error("Failed to parse CSV. Please check the format.")]
    MalformedInput,

    /// No header matched the question or the answer column keywords
    #[error("No matching columns found. Ensure CSV has \"question\" and \"answer\" columns.")]
    NoMatchingColumns,

    /// Columns resolved but no row had both cells filled in
    #[error("No valid flashcards found. Ensure CSV has \"question\" and \"answer\" columns.")]
    NoValidRows,

    /// The selected file is not a CSV file
    #[error("Please upload a valid CSV file: {}", .0.display())]
    UnsupportedFile(PathBuf),

    /// The file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
