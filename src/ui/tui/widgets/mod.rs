//! Ratatui widgets for the study TUI

mod card_view;
mod confirm_dialog;
mod controls;
mod help_bar;
mod help_overlay;
mod status_bar;
mod upload_panel;

pub use card_view::{CardView, CaughtUpPanel};
pub use confirm_dialog::{ConfirmAction, ConfirmDialog, ConfirmDialogState};
pub use controls::Controls;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use upload_panel::UploadPanel;
