//! Check command - validate a CSV file and preview its cards

use crate::{FlashmasterError, ingest, ui::OutputWriter};
use std::path::Path;

type Result<T> = std::result::Result<T, FlashmasterError>;

/// Longest question or answer shown in a preview line, in characters
const PREVIEW_WIDTH: usize = 60;

/// Execute the check command
///
/// # Errors
///
/// Returns the ingestion error if the file cannot be turned into a deck.
pub fn execute(path: &Path, preview: usize, out: &dyn OutputWriter) -> Result<()> {
    let table = ingest::read_file(path)?;
    let report = ingest::ingest_with_report(&table)?;

    out.success(&format!(
        "{} card(s) found in {}",
        report.deck.len(),
        path.display()
    ));
    out.info(&format!(
        "Columns: question = \"{}\", answer = \"{}\"",
        report.columns.question, report.columns.answer
    ));
    if report.skipped > 0 {
        out.warning(&format!(
            "{} row(s) skipped (missing question or answer)",
            report.skipped
        ));
    }
    if table.error_count() > 0 {
        out.warning(&format!(
            "{} malformed row(s) ignored",
            table.error_count()
        ));
    }

    for (i, card) in report.deck.iter().take(preview).enumerate() {
        out.write(&format!(
            "{:>3}. {}  →  {}",
            i + 1,
            truncate(&card.question),
            truncate(&card.answer)
        ));
    }
    if report.deck.len() > preview && preview > 0 {
        out.info(&format!("… and {} more", report.deck.len() - preview));
    }

    Ok(())
}

fn truncate(text: &str) -> String {
    let single_line = text.replace(['\r', '\n'], " ");
    if single_line.chars().count() <= PREVIEW_WIDTH {
        return single_line;
    }
    let mut cut: String = single_line.chars().take(PREVIEW_WIDTH - 1).collect();
    cut.push('…');
    cut
}
