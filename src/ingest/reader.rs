//! CSV tokenizing and file reading
//!
//! Produces a [`RawTable`] from CSV text. The first record is the header row;
//! records may be ragged (fewer or more cells than headers) and blank lines
//! are ignored. A record the tokenizer cannot parse is skipped and counted,
//! and only when nothing at all parses is the input reported as malformed.

use super::{IngestError, RawTable};
use crate::deck::Deck;
use std::fs;
use std::path::Path;

/// Whether `path` looks like a CSV file (by extension, case-insensitive)
#[must_use]
pub fn is_csv_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Tokenize CSV text into a table
///
/// # Errors
///
/// Returns [`IngestError::MalformedInput`] if there is no header row, or if
/// every data record failed to tokenize.
pub fn read_table(text: &str) -> Result<RawTable, IngestError> {
    let text = text.trim_start_matches('\u{feff}');

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| {
            log::warn!("unreadable CSV header row: {e}");
            IngestError::MalformedInput
        })?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::MalformedInput);
    }

    let mut table = RawTable::from_records(headers, Vec::new());
    for result in rdr.records() {
        match result {
            Ok(record) => table.push_record(record.iter().map(str::to_string).collect()),
            Err(e) => {
                log::warn!("skipping unparseable CSV record: {e}");
                table.note_error();
            }
        }
    }

    if table.is_malformed() {
        return Err(IngestError::MalformedInput);
    }
    Ok(table)
}

/// Read and tokenize a CSV file
///
/// # Errors
///
/// - [`IngestError::UnsupportedFile`] if the path does not end in `.csv`
/// - [`IngestError::Io`] if the file cannot be read
/// - [`IngestError::MalformedInput`] if the content is not UTF-8 or not tabular
pub fn read_file(path: &Path) -> Result<RawTable, IngestError> {
    if !is_csv_path(path) {
        return Err(IngestError::UnsupportedFile(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        log::warn!("{} is not valid UTF-8: {e}", path.display());
        IngestError::MalformedInput
    })?;

    read_table(&text)
}

/// Read a CSV file and ingest it into a deck
///
/// # Errors
///
/// Any error from [`read_file`] or [`super::ingest`].
pub fn load_deck(path: &Path) -> Result<Deck, IngestError> {
    let table = read_file(path)?;
    let deck = super::ingest(&table)?;
    log::info!("loaded {} card(s) from {}", deck.len(), path.display());
    Ok(deck)
}
