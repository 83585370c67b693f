//! Confirmation dialog widget for destructive actions
//!
//! Provides a modal dialog overlay that asks the user to confirm before
//! resetting learned progress or abandoning the current deck.

use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Destructive action waiting on confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Clear all learned marks
    ResetProgress,
    /// Drop the deck and go back to the upload screen
    ReturnToUpload,
}

/// State for the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    /// The title/prompt for the dialog
    pub title: String,
    /// Detailed message explaining what will happen
    pub message: String,
    /// Action to execute on confirmation
    pub action: ConfirmAction,
}

impl ConfirmDialogState {
    /// Create a new confirmation dialog state
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        action: ConfirmAction,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            action,
        }
    }

    /// Standard dialog wording for an action
    #[must_use]
    pub fn for_action(action: ConfirmAction) -> Self {
        match action {
            ConfirmAction::ResetProgress => Self::new(
                "Reset Progress",
                "This will clear your 'Learned' progress. Continue?",
                action,
            ),
            ConfirmAction::ReturnToUpload => Self::new(
                "Back to Upload",
                "Go back to upload? This clears the current deck.",
                action,
            ),
        }
    }
}

/// Confirmation dialog overlay widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    /// Create a new confirmation dialog widget
    #[must_use]
    pub const fn new(state: &'a ConfirmDialogState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for ConfirmDialog<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Wider for longer messages
        let message_width = self.state.message.chars().count() as u16 + 4;
        let width = message_width
            .clamp(40, 70)
            .min(area.width.saturating_sub(4));
        let height = 8;

        let modal_area = Self::centered_rect(width, height, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacing
            Constraint::Length(2), // Message
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Help
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White))
            .render(chunks[1], buf);

        let buttons = Line::from(vec![
            Span::styled(
                " [Y]es ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(" [N]o ", self.theme.dimmed_style()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        Paragraph::new("y/Enter: confirm  n/Esc: cancel")
            .alignment(Alignment::Center)
            .style(self.theme.dimmed_style())
            .render(chunks[4], buf);
    }
}
