//! Event handling for the study TUI
//!
//! Maps key presses to [`Action`]s on the session or to edits of the
//! presentation state. Destructive actions go through a confirmation dialog
//! first.

use super::state::{Mode, TuiState};
use super::widgets::{ConfirmAction, ConfirmDialogState};
use crate::session::{Action, ActionOutcome, Session};
use crate::ui::output::MessageLevel;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Start ingesting the file at this path
    Submit(PathBuf),
    /// Exit the application
    Quit,
    /// No action taken
    Ignored,
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Handle a key press against the current screen
pub fn handle_key(state: &mut TuiState, session: &mut Session, key: KeyEvent) -> EventResult {
    if is_ctrl_c(&key) {
        return EventResult::Quit;
    }
    state.sync_flip(session.current().map(|c| c.id.as_str()));

    let result = match state.mode {
        Mode::Help => handle_help_mode(state),
        Mode::Confirm => handle_confirm_mode(state, session, key),
        Mode::Normal if session.is_studying() => handle_study_mode(state, session, key),
        Mode::Normal => handle_upload_mode(state, key),
    };

    state.sync_flip(session.current().map(|c| c.id.as_str()));
    result
}

/// Any key closes help
fn handle_help_mode(state: &mut TuiState) -> EventResult {
    state.mode = Mode::Normal;
    EventResult::Continue
}

fn handle_confirm_mode(state: &mut TuiState, session: &mut Session, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
            let Some(dialog) = state.close_confirm() else {
                return EventResult::Ignored;
            };
            match dialog.action {
                ConfirmAction::ResetProgress => {
                    if session.dispatch(Action::ResetProgress) == ActionOutcome::Applied {
                        state.add_message(MessageLevel::Success, "Progress reset");
                    }
                }
                ConfirmAction::ReturnToUpload => {
                    session.dispatch(Action::ReturnToUpload);
                    state.upload_error = None;
                    state.messages.clear();
                }
            }
            EventResult::Continue
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            state.close_confirm();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_upload_mode(state: &mut TuiState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => EventResult::Quit,
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            let path = state.path_input.trim();
            if path.is_empty() {
                EventResult::Ignored
            } else {
                EventResult::Submit(PathBuf::from(path))
            }
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.path_clear();
            EventResult::Continue
        }
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
            state.path_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            state.path_backspace();
            EventResult::Continue
        }
        (KeyCode::Delete, _) => {
            state.path_delete();
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            state.path_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.path_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.path_cursor_home();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.path_cursor_end();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_study_mode(state: &mut TuiState, session: &mut Session, key: KeyEvent) -> EventResult {
    let caught_up = session.current().is_none();

    let action = match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('?') | KeyCode::F(1) => {
            state.mode = Mode::Help;
            return EventResult::Continue;
        }
        KeyCode::Char('r') => {
            state.open_confirm(ConfirmDialogState::for_action(ConfirmAction::ResetProgress));
            return EventResult::Continue;
        }
        KeyCode::Char('b') | KeyCode::Esc => {
            state.open_confirm(ConfirmDialogState::for_action(ConfirmAction::ReturnToUpload));
            return EventResult::Continue;
        }
        KeyCode::Char('a') | KeyCode::Enter if caught_up => Action::SetHideLearned(false),
        KeyCode::Char(' ') | KeyCode::Enter => {
            if caught_up {
                return EventResult::Ignored;
            }
            state.toggle_flip();
            return EventResult::Continue;
        }
        KeyCode::Left => Action::Prev,
        KeyCode::Right => Action::Next,
        KeyCode::Char('l') => Action::ToggleLearned,
        KeyCode::Char('s') => Action::Shuffle,
        KeyCode::Char('h') => Action::ToggleHideLearned,
        _ => return EventResult::Ignored,
    };

    match session.dispatch(action) {
        ActionOutcome::Applied => {
            if action == Action::Shuffle {
                state.add_message(MessageLevel::Info, "Deck shuffled");
            }
            EventResult::Continue
        }
        ActionOutcome::Ignored => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut TuiState,
    session: &mut Session,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, session, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::{LearnedStore, MemoryStore};
    use crate::testing::deck_of;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup(ids: &[&str]) -> (TuiState, Session, MemoryStore) {
        let store = MemoryStore::new();
        let mut session = Session::seeded(Box::new(store.clone()), 7);
        if !ids.is_empty() {
            let ticket = session.begin_ingest();
            session.complete_ingest(ticket, Ok(deck_of(ids)));
        }
        (TuiState::new(Duration::from_secs(3)), session, store)
    }

    fn current(session: &Session) -> Option<&str> {
        session.current().map(|c| c.id.as_str())
    }

    #[test]
    fn test_upload_typing_and_submit() {
        let (mut state, mut session, _) = setup(&[]);
        for c in " deck.csv ".chars() {
            handle_key(&mut state, &mut session, press(KeyCode::Char(c)));
        }

        let result = handle_key(&mut state, &mut session, press(KeyCode::Enter));
        assert_eq!(result, EventResult::Submit(PathBuf::from("deck.csv")));
    }

    #[test]
    fn test_upload_empty_submit_ignored() {
        let (mut state, mut session, _) = setup(&[]);
        assert_eq!(
            handle_key(&mut state, &mut session, press(KeyCode::Enter)),
            EventResult::Ignored
        );
    }

    #[test]
    fn test_letters_are_text_on_upload_screen() {
        let (mut state, mut session, _) = setup(&[]);
        handle_key(&mut state, &mut session, press(KeyCode::Char('q')));
        assert_eq!(state.path_input, "q");
        assert_eq!(
            handle_key(&mut state, &mut session, press(KeyCode::Esc)),
            EventResult::Quit
        );
    }

    #[test]
    fn test_arrow_navigation() {
        let (mut state, mut session, _) = setup(&["a", "b", "c"]);
        handle_key(&mut state, &mut session, press(KeyCode::Right));
        assert_eq!(current(&session), Some("b"));

        handle_key(&mut state, &mut session, press(KeyCode::Left));
        handle_key(&mut state, &mut session, press(KeyCode::Left));
        assert_eq!(current(&session), Some("c"));
    }

    #[test]
    fn test_flip_resets_on_navigation() {
        let (mut state, mut session, _) = setup(&["a", "b"]);
        handle_key(&mut state, &mut session, press(KeyCode::Char(' ')));
        assert!(state.flipped);

        handle_key(&mut state, &mut session, press(KeyCode::Right));
        assert!(!state.flipped);
    }

    #[test]
    fn test_learned_key_persists() {
        let (mut state, mut session, store) = setup(&["a", "b"]);
        handle_key(&mut state, &mut session, press(KeyCode::Char('l')));
        assert!(store.load().contains("a"));
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let (mut state, mut session, store) = setup(&["a"]);
        handle_key(&mut state, &mut session, press(KeyCode::Char('l')));

        handle_key(&mut state, &mut session, press(KeyCode::Char('r')));
        assert_eq!(state.mode, Mode::Confirm);
        handle_key(&mut state, &mut session, press(KeyCode::Char('n')));
        assert_eq!(state.mode, Mode::Normal);
        assert!(store.load().contains("a"));

        handle_key(&mut state, &mut session, press(KeyCode::Char('r')));
        handle_key(&mut state, &mut session, press(KeyCode::Char('y')));
        assert!(store.load().is_empty());
        assert_eq!(state.active_messages().len(), 1);
    }

    #[test]
    fn test_back_to_upload_confirmed() {
        let (mut state, mut session, _) = setup(&["a"]);
        handle_key(&mut state, &mut session, press(KeyCode::Esc));
        assert_eq!(state.mode, Mode::Confirm);

        handle_key(&mut state, &mut session, press(KeyCode::Enter));
        assert!(!session.is_studying());
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_caught_up_review_all() {
        let (mut state, mut session, _) = setup(&["a"]);
        handle_key(&mut state, &mut session, press(KeyCode::Char('l')));
        handle_key(&mut state, &mut session, press(KeyCode::Char('h')));
        assert!(session.current().is_none());

        assert_eq!(
            handle_key(&mut state, &mut session, press(KeyCode::Char(' '))),
            EventResult::Ignored
        );

        handle_key(&mut state, &mut session, press(KeyCode::Enter));
        assert_eq!(current(&session), Some("a"));
        assert!(!session.store().hide_learned());
        assert!(!state.flipped);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let (mut state, mut session, _) = setup(&["a"]);
        handle_key(&mut state, &mut session, press(KeyCode::Char('?')));
        assert_eq!(state.mode, Mode::Help);

        handle_key(&mut state, &mut session, press(KeyCode::Char('l')));
        assert_eq!(state.mode, Mode::Normal);
        assert!(!session.store().is_learned("a"));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let (mut state, mut session, _) = setup(&[]);
        assert_eq!(handle_key(&mut state, &mut session, ctrl_c), EventResult::Quit);

        let (mut state, mut session, _) = setup(&["a"]);
        state.mode = Mode::Help;
        assert_eq!(handle_key(&mut state, &mut session, ctrl_c), EventResult::Quit);
    }

    #[test]
    fn test_shuffle_reports_message() {
        let (mut state, mut session, _) = setup(&["a", "b", "c"]);
        handle_key(&mut state, &mut session, press(KeyCode::Char('s')));
        assert_eq!(session.store().cursor(), 0);
        assert_eq!(state.active_messages()[0].text, "Deck shuffled");
    }
}
