//! Study command - open the interactive study TUI

use crate::{FlashmasterError, persist::LearnedStore, session::Session, ui::StudyApp};
use std::path::PathBuf;
use std::time::Duration;

type Result<T> = std::result::Result<T, FlashmasterError>;

/// Settings for a study run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyOptions {
    /// Shuffle seed; entropy when `None`
    pub seed: Option<u64>,
    /// Start with learned cards hidden
    pub hide_learned: bool,
    /// How long status messages stay visible
    pub message_ttl: Duration,
}

/// Build the session a study run starts from
#[must_use]
pub fn build_session(store: Box<dyn LearnedStore>, options: &StudyOptions) -> Session {
    let session = match options.seed {
        Some(seed) => {
            log::debug!("shuffle seed {seed}");
            Session::seeded(store, seed)
        }
        None => Session::new(store),
    };
    session.with_hide_learned(options.hide_learned)
}

/// Execute the study command
///
/// # Errors
///
/// Returns an error if the terminal UI fails.
pub fn execute(
    store: Box<dyn LearnedStore>,
    options: &StudyOptions,
    file: Option<PathBuf>,
) -> Result<()> {
    let session = build_session(store, options);
    StudyApp::new(session, options.message_ttl).run(file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;
    use crate::session::Action;
    use crate::testing::deck_of;

    fn options(seed: Option<u64>, hide_learned: bool) -> StudyOptions {
        StudyOptions {
            seed,
            hide_learned,
            message_ttl: Duration::from_secs(3),
        }
    }

    #[test]
    fn test_build_session_applies_options() {
        let session = build_session(Box::new(MemoryStore::new()), &options(None, true));
        assert!(session.store().hide_learned());
        assert!(!session.is_studying());
    }

    #[test]
    fn test_seeded_sessions_shuffle_alike() {
        let order = || {
            let mut session =
                build_session(Box::new(MemoryStore::new()), &options(Some(42), false));
            let ticket = session.begin_ingest();
            session.complete_ingest(ticket, Ok(deck_of(&["a", "b", "c", "d", "e", "f"])));
            session.dispatch(Action::Shuffle);
            session
                .store()
                .deck()
                .iter()
                .map(|c| c.id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(order(), order());
    }
}
