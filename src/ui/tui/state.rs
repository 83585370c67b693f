//! Presentation state for the study TUI
//!
//! Holds everything the screen needs that is not study state: the upload
//! path being typed, whether the card is flipped, the open dialog and the
//! status messages. Study state itself lives in the [`crate::session::Session`].

use super::widgets::ConfirmDialogState;
use crate::session::IngestTicket;
use crate::ui::output::MessageLevel;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal interaction with the current screen
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Confirmation dialog is active
    Confirm,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// An ingestion that has been handed to the background loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub ticket: IngestTicket,
    pub path: PathBuf,
}

/// Presentation state for the study TUI
#[derive(Debug)]
pub struct TuiState {
    /// Current UI mode
    pub mode: Mode,
    /// Path typed on the upload screen
    pub path_input: String,
    /// Cursor position within `path_input`, in characters
    pub path_cursor: usize,
    /// Error from the last failed ingestion, shown on the upload screen
    pub upload_error: Option<String>,
    /// Ingestion currently in flight, if any
    pub loading: Option<PendingLoad>,
    /// Whether the answer side is showing
    pub flipped: bool,
    /// Card the flip state belongs to
    flip_card: Option<String>,
    /// State for confirmation dialog
    pub confirm_state: Option<ConfirmDialogState>,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the app should exit
    pub should_exit: bool,
}

impl TuiState {
    /// Create state for a fresh upload screen
    #[must_use]
    pub fn new(message_ttl: Duration) -> Self {
        Self {
            mode: Mode::Normal,
            path_input: String::new(),
            path_cursor: 0,
            upload_error: None,
            loading: None,
            flipped: false,
            flip_card: None,
            confirm_state: None,
            messages: Vec::new(),
            message_ttl,
            should_exit: false,
        }
    }

    /// Flip between question and answer
    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Show the question side again if the current card changed
    pub fn sync_flip(&mut self, current_id: Option<&str>) {
        if self.flip_card.as_deref() != current_id {
            self.flipped = false;
            self.flip_card = current_id.map(str::to_string);
        }
    }

    /// Open a confirmation dialog
    pub fn open_confirm(&mut self, dialog: ConfirmDialogState) {
        self.confirm_state = Some(dialog);
        self.mode = Mode::Confirm;
    }

    /// Close the confirmation dialog, returning it
    pub fn close_confirm(&mut self) -> Option<ConfirmDialogState> {
        self.mode = Mode::Normal;
        self.confirm_state.take()
    }

    /// Insert a character at the path cursor
    pub fn path_push(&mut self, c: char) {
        let byte_idx = self.path_byte_index();
        self.path_input.insert(byte_idx, c);
        self.path_cursor += 1;
    }

    /// Delete the character before the path cursor
    pub fn path_backspace(&mut self) {
        if self.path_cursor == 0 {
            return;
        }
        self.path_cursor -= 1;
        let byte_idx = self.path_byte_index();
        self.path_input.remove(byte_idx);
    }

    /// Delete the character under the path cursor
    pub fn path_delete(&mut self) {
        if self.path_cursor < self.path_input.chars().count() {
            let byte_idx = self.path_byte_index();
            self.path_input.remove(byte_idx);
        }
    }

    pub fn path_cursor_left(&mut self) {
        self.path_cursor = self.path_cursor.saturating_sub(1);
    }

    pub fn path_cursor_right(&mut self) {
        self.path_cursor = (self.path_cursor + 1).min(self.path_input.chars().count());
    }

    pub fn path_cursor_home(&mut self) {
        self.path_cursor = 0;
    }

    pub fn path_cursor_end(&mut self) {
        self.path_cursor = self.path_input.chars().count();
    }

    pub fn path_clear(&mut self) {
        self.path_input.clear();
        self.path_cursor = 0;
    }

    /// Replace the path input, placing the cursor at the end
    pub fn set_path(&mut self, path: &str) {
        self.path_input = path.to_string();
        self.path_cursor_end();
    }

    fn path_byte_index(&self) -> usize {
        self.path_input
            .char_indices()
            .nth(self.path_cursor)
            .map_or(self.path_input.len(), |(i, _)| i)
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text.into()));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }
}
