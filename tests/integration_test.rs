//! Integration tests for flashmaster
//!
//! These tests drive the public API end to end: CSV files on disk are
//! ingested into a session backed by a real sled store, studied, and the
//! learned set is checked across simulated restarts.

use flashmaster::{
    FlashmasterError,
    commands,
    deck::LearnedSet,
    ingest::{self, IngestError},
    persist::{LEARNED_KEY, LearnedStore, SledStore},
    session::{Action, ActionOutcome, IngestOutcome, Phase, Session},
    ui::BufferedWriter,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a CSV file inside `dir`
fn create_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Helper function to open a sled store inside `dir`
fn open_store(dir: &Path) -> SledStore {
    SledStore::open(dir.join("learned.db")).unwrap()
}

/// Load `path` into a fresh seeded session
fn study(store: SledStore, path: &Path) -> Session {
    let mut session = Session::seeded(Box::new(store), 11);
    let ticket = session.begin_ingest();
    let outcome = session.complete_ingest(ticket, ingest::load_deck(path));
    assert!(matches!(outcome, IngestOutcome::Loaded { .. }));
    session
}

fn current_question(session: &Session) -> Option<&str> {
    session.current().map(|c| c.question.as_str())
}

#[test]
fn test_load_navigate_and_wrap() {
    let dir = TempDir::new().unwrap();
    let csv = create_csv(
        dir.path(),
        "deck.csv",
        "Question,Answer\nQ1,A1\nQ2,A2\nQ3,A3\n",
    );

    let mut session = study(open_store(dir.path()), &csv);
    assert_eq!(session.phase(), Phase::Studying);
    assert_eq!(current_question(&session), Some("Q1"));

    session.dispatch(Action::Prev);
    assert_eq!(current_question(&session), Some("Q3"));

    session.dispatch(Action::Next);
    session.dispatch(Action::Next);
    assert_eq!(current_question(&session), Some("Q2"));

    let progress = session.store().progress().unwrap();
    assert_eq!((progress.position, progress.total), (2, 3));
}

#[test]
fn test_header_aliases_and_quoted_fields() {
    let dir = TempDir::new().unwrap();
    let csv = create_csv(
        dir.path(),
        "aliases.csv",
        "\u{feff}Notes,Front Side,Back Side\nx,\"Hello, world\",\"line one\nline two\"\ny,  ,skipped\n",
    );

    let deck = ingest::load_deck(&csv).unwrap();
    assert_eq!(deck.len(), 1);
    let card = &deck.cards()[0];
    assert_eq!(card.question, "Hello, world");
    assert_eq!(card.answer, "line one\nline two");
}

#[test]
fn test_ingest_errors() {
    let dir = TempDir::new().unwrap();

    let no_columns = create_csv(dir.path(), "cols.csv", "foo,bar\n1,2\n");
    assert!(matches!(
        ingest::load_deck(&no_columns),
        Err(IngestError::NoMatchingColumns)
    ));

    let no_rows = create_csv(dir.path(), "rows.csv", "question,answer\n,\nQ,\n");
    assert!(matches!(
        ingest::load_deck(&no_rows),
        Err(IngestError::NoValidRows)
    ));

    let not_csv = create_csv(dir.path(), "deck.txt", "question,answer\nQ,A\n");
    assert!(matches!(
        ingest::load_deck(&not_csv),
        Err(IngestError::UnsupportedFile(_))
    ));

    assert!(matches!(
        ingest::load_deck(&dir.path().join("missing.csv")),
        Err(IngestError::Io { .. })
    ));
}

#[test]
fn test_learned_survives_restart() {
    let dir = TempDir::new().unwrap();
    let csv = create_csv(dir.path(), "deck.csv", "term,definition\nT1,D1\nT2,D2\n");

    let learned_id = {
        let mut session = study(open_store(dir.path()), &csv);
        session.dispatch(Action::Next);
        session.dispatch(Action::ToggleLearned);
        session.current().unwrap().id.clone()
    };

    let store = open_store(dir.path());
    let restored = store.load();
    assert_eq!(restored.len(), 1);
    assert!(restored.contains(&learned_id));

    let session = Session::new(Box::new(store));
    assert!(session.store().is_learned(&learned_id));
}

#[test]
fn test_persisted_value_is_json_array() {
    let dir = TempDir::new().unwrap();
    let store = open_store(dir.path());
    let ids: LearnedSet = ["b".to_string(), "a".to_string()].into_iter().collect();
    store.save(&ids);
    drop(store);

    let db = sled::open(dir.path().join("learned.db")).unwrap();
    let raw = db.get(LEARNED_KEY).unwrap().unwrap();
    let parsed: Vec<String> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(parsed, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_corrupted_store_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = open_store(dir.path());
    store.put_raw(b"{not json").unwrap();

    let session = Session::new(Box::new(store.clone()));
    assert_eq!(session.store().learned_count(), 0);

    // The next save overwrites the corrupt value
    store.save(&LearnedSet::new());
    assert!(store.load().is_empty());
}

#[test]
fn test_hide_learned_until_caught_up() {
    let dir = TempDir::new().unwrap();
    let csv = create_csv(dir.path(), "deck.csv", "question,answer\nA,1\nB,2\nC,3\n");
    let mut session = study(open_store(dir.path()), &csv);

    session.dispatch(Action::SetHideLearned(true));
    for _ in 0..3 {
        session.dispatch(Action::ToggleLearned);
    }
    assert!(session.current().is_none());
    assert!(session.store().progress().is_none());

    session.dispatch(Action::SetHideLearned(false));
    assert_eq!(session.store().visible_len(), 3);

    session.dispatch(Action::ResetProgress);
    assert_eq!(session.store().learned_count(), 0);
}

#[test]
fn test_return_to_upload_then_reload() {
    let dir = TempDir::new().unwrap();
    let first = create_csv(dir.path(), "first.csv", "question,answer\nQ1,A1\n");
    let second = create_csv(dir.path(), "second.csv", "question,answer\nR1,B1\nR2,B2\n");

    let mut session = study(open_store(dir.path()), &first);
    session.dispatch(Action::ToggleLearned);

    session.dispatch(Action::ReturnToUpload);
    assert_eq!(session.phase(), Phase::Upload);
    assert_eq!(session.dispatch(Action::Next), ActionOutcome::Ignored);

    let ticket = session.begin_ingest();
    session.complete_ingest(ticket, ingest::load_deck(&second));
    assert_eq!(session.store().deck().len(), 2);
    assert_eq!(current_question(&session), Some("R1"));
}

#[test]
fn test_check_and_reset_commands() {
    let dir = TempDir::new().unwrap();
    let csv = create_csv(dir.path(), "deck.csv", "question,answer\nQ1,A1\nQ2,A2\n");

    let out = BufferedWriter::new();
    commands::check(&csv, 5, &out).unwrap();
    assert!(out.text().contains("2 card(s) found"));

    let bad = create_csv(dir.path(), "bad.csv", "a,b\n1,2\n");
    let err = commands::check(&bad, 5, &BufferedWriter::new()).unwrap_err();
    assert!(matches!(err, FlashmasterError::Ingest(IngestError::NoMatchingColumns)));
    assert_eq!(
        err.to_string(),
        "No matching columns found. Ensure CSV has \"question\" and \"answer\" columns."
    );

    let store = open_store(dir.path());
    store.save(&["x".to_string()].into_iter().collect());
    let out = BufferedWriter::new();
    commands::reset(&store, true, &out).unwrap();
    assert!(store.load().is_empty());
}
