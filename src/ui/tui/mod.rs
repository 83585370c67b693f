//! Terminal study interface
//!
//! A two-screen ratatui application: an upload screen that takes a CSV path
//! and a study screen that shows one card at a time. All study state lives in
//! the [`crate::session::Session`]; this module only holds presentation state
//! (typed path, flip side, dialogs, status messages) and turns key presses
//! into session actions.
//!
//! File ingestion runs on a worker thread (see [`loader`]) so a large deck
//! never blocks drawing.

mod app;
pub mod events;
pub mod loader;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{StudyApp, draw_ui};
pub use events::EventResult;
pub use state::{Mode, TuiState};
pub use theme::Theme;
