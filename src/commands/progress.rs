//! Progress commands - inspect or clear the learned set on disk

use crate::{
    FlashmasterError,
    deck::LearnedSet,
    persist::LearnedStore,
    ui::{OutputWriter, UiError},
};
use dialoguer::Confirm;

type Result<T> = std::result::Result<T, FlashmasterError>;

/// Print how many cards are marked learned
pub fn show(store: &dyn LearnedStore, out: &dyn OutputWriter) {
    let count = store.load().len();
    if count == 0 {
        out.info("No cards marked as learned.");
    } else {
        out.write(&format!("{count} card(s) marked as learned"));
    }
}

/// Clear the persisted learned set
///
/// Asks for confirmation unless `yes` is set.
///
/// # Errors
///
/// Returns an error if the confirmation prompt cannot be read or the
/// cleared set cannot be written.
pub fn reset(store: &dyn LearnedStore, yes: bool, out: &dyn OutputWriter) -> Result<()> {
    let count = store.load().len();
    if count == 0 {
        out.info("Nothing to reset.");
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "This will clear your 'Learned' progress ({count} card(s)). Continue?"
            ))
            .default(false)
            .interact()
            .map_err(UiError::from)?;
        if !confirmed {
            out.info("Reset cancelled.");
            return Ok(());
        }
    }

    store.try_save(&LearnedSet::new())?;
    log::info!("cleared {count} learned id(s)");
    out.success(&format!("Cleared {count} learned card(s)"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::{MemoryStore, PersistenceError};
    use crate::ui::BufferedWriter;

    /// Store whose writes always fail
    struct ReadOnlyStore(MemoryStore);

    impl LearnedStore for ReadOnlyStore {
        fn try_save(&self, _ids: &LearnedSet) -> std::result::Result<(), PersistenceError> {
            Err(sled::Error::Unsupported("read-only".to_string()).into())
        }

        fn load(&self) -> LearnedSet {
            self.0.load()
        }
    }

    fn store_with(ids: &[&str]) -> MemoryStore {
        let store = MemoryStore::new();
        store.save(&ids.iter().map(|s| (*s).to_string()).collect());
        store
    }

    #[test]
    fn test_show_counts() {
        let out = BufferedWriter::new();
        show(&store_with(&["a", "b"]), &out);
        assert_eq!(out.text(), "2 card(s) marked as learned");

        let out = BufferedWriter::new();
        show(&MemoryStore::new(), &out);
        assert_eq!(out.text(), "No cards marked as learned.");
    }

    #[test]
    fn test_reset_with_yes() {
        let store = store_with(&["a", "b", "c"]);
        let out = BufferedWriter::new();

        reset(&store, true, &out).unwrap();

        assert!(store.load().is_empty());
        assert_eq!(out.text(), "Cleared 3 learned card(s)");
    }

    #[test]
    fn test_reset_reports_failed_write() {
        let store = ReadOnlyStore(store_with(&["a", "b"]));
        let out = BufferedWriter::new();

        let err = reset(&store, true, &out).unwrap_err();

        assert!(matches!(err, FlashmasterError::Persistence(_)));
        assert!(!out.text().contains("Cleared"));
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_reset_nothing_to_do() {
        let store = MemoryStore::new();
        let out = BufferedWriter::new();
        reset(&store, false, &out).unwrap();
        assert_eq!(out.text(), "Nothing to reset.");
        assert!(store.get_raw().is_none());
    }
}
