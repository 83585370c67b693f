//! CSV-to-deck ingestion
//!
//! Turns a [`RawTable`] (rows keyed by normalized column header) into a
//! [`Deck`]. Column detection is deliberately permissive: any header that
//! *contains* one of the question or answer keywords is accepted, so
//! `"Term"`, `"Front side"` and `"question text"` all resolve.
//!
//! Tokenizing the file into a table is the job of [`reader`]; everything in
//! this module is a pure transformation.
//!
//! # Examples
//!
//! ```
//! use flashmaster::ingest::{self, RawTable};
//!
//! let table = RawTable::from_records(
//!     vec!["Term".into(), "Definition".into()],
//!     vec![vec!["ownership".into(), "one owner per value".into()]],
//! );
//! let deck = ingest::ingest(&table).unwrap();
//! assert_eq!(deck.len(), 1);
//! ```

use crate::deck::{Deck, FlashcardRecord};
use std::collections::HashMap;

pub mod error;
pub mod reader;

pub use error::IngestError;
pub use reader::{load_deck, read_file, read_table};

/// Header keywords that identify the question column
pub const QUESTION_KEYWORDS: [&str; 3] = ["question", "front", "term"];

/// Header keywords that identify the answer column
pub const ANSWER_KEYWORDS: [&str; 3] = ["answer", "back", "definition"];

/// Normalize a column header for matching (trimmed, lowercased)
#[must_use]
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// One table row: normalized header -> cell text
pub type RawRow = HashMap<String, String>;

/// Tabular input as produced by the CSV tokenizer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<RawRow>,
    errors: usize,
}

impl RawTable {
    /// Build a table from a header record and data records
    ///
    /// Headers are normalized. A record shorter than the header row simply
    /// lacks the trailing columns; extra cells beyond the header are dropped.
    /// When two headers normalize to the same name the first one wins.
    #[must_use]
    pub fn from_records(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let mut table = Self {
            headers,
            rows: Vec::with_capacity(records.len()),
            errors: 0,
        };
        for record in records {
            table.push_record(record);
        }
        table
    }

    /// Append a data record, mapping cells onto the table's headers
    pub fn push_record(&mut self, record: Vec<String>) {
        let mut row = RawRow::with_capacity(record.len());
        for (header, cell) in self.headers.iter().zip(record) {
            row.entry(header.clone()).or_insert(cell);
        }
        self.rows.push(row);
    }

    /// Record that the tokenizer failed on a row
    pub fn note_error(&mut self) {
        self.errors += 1;
    }

    /// Normalized headers in file order
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in file order
    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Number of rows the tokenizer could not parse
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.errors
    }

    /// Whether tokenizing failed so badly that no rows came out
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.errors > 0 && self.rows.is_empty()
    }
}

/// The question and answer headers selected for an ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub question: String,
    pub answer: String,
}

impl ColumnMapping {
    /// Resolve the question and answer columns from a header list
    ///
    /// Each column is the first header whose normalized name contains one of
    /// its keywords. Returns `None` if either column cannot be found.
    #[must_use]
    pub fn resolve(headers: &[String]) -> Option<Self> {
        let find = |keywords: &[&str]| {
            headers
                .iter()
                .map(|h| normalize_header(h))
                .find(|h| keywords.iter().any(|k| h.contains(k)))
        };
        Some(Self {
            question: find(&QUESTION_KEYWORDS)?,
            answer: find(&ANSWER_KEYWORDS)?,
        })
    }
}

/// Outcome of a successful ingestion
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub deck: Deck,
    pub columns: ColumnMapping,
    /// Rows dropped because a cell was missing or blank
    pub skipped: usize,
}

/// Convert a table into a deck
///
/// # Errors
///
/// - [`IngestError::MalformedInput`] if the table failed to tokenize and has no rows
/// - [`IngestError::NoMatchingColumns`] if no question or answer header exists
/// - [`IngestError::NoValidRows`] if no row has both cells non-empty
pub fn ingest(table: &RawTable) -> Result<Deck, IngestError> {
    ingest_with_report(table).map(|report| report.deck)
}

/// Convert a table into a deck, also reporting the columns used and rows skipped
///
/// Ids are `card-{row}-{stamp}` where `row` is the position in the table
/// and `stamp` is one wall-clock millisecond value shared by the batch, so
/// ids never collide within an ingestion.
///
/// # Errors
///
/// Same as [`ingest`].
pub fn ingest_with_report(table: &RawTable) -> Result<IngestReport, IngestError> {
    ingest_stamped(table, chrono::Utc::now().timestamp_millis())
}

fn ingest_stamped(table: &RawTable, stamp: i64) -> Result<IngestReport, IngestError> {
    if table.is_malformed() {
        return Err(IngestError::MalformedInput);
    }

    let columns = ColumnMapping::resolve(table.headers()).ok_or(IngestError::NoMatchingColumns)?;
    log::debug!(
        "resolved columns: question={:?} answer={:?}",
        columns.question,
        columns.answer
    );

    let cards: Vec<FlashcardRecord> = table
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let question = row.get(&columns.question)?.trim();
            let answer = row.get(&columns.answer)?.trim();
            (!question.is_empty() && !answer.is_empty())
                .then(|| FlashcardRecord::new(format!("card-{index}-{stamp}"), question, answer))
        })
        .collect();

    let skipped = table.rows().len() - cards.len();
    log::debug!("ingested {} card(s), skipped {skipped} row(s)", cards.len());

    if cards.is_empty() {
        return Err(IngestError::NoValidRows);
    }

    Ok(IngestReport {
        deck: Deck::new(cards),
        columns,
        skipped,
    })
}
