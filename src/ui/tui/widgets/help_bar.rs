//! Help bar widget for displaying keybind hints

use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g., "Space", "←/→")
    pub key: String,
    /// Action description (e.g., "flip", "learned")
    pub action: String,
}

impl KeyHint {
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the upload screen
    #[must_use]
    pub fn upload_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Enter", "load"),
            KeyHint::new("Esc", "quit"),
            KeyHint::new("F1", "help"),
        ]
    }

    /// Hints for the study screen
    #[must_use]
    pub fn study_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("←/→", "prev/next"),
            KeyHint::new("Space", "flip"),
            KeyHint::new("l", "learned"),
            KeyHint::new("s", "shuffle"),
            KeyHint::new("h", "hide learned"),
            KeyHint::new("r", "reset"),
            KeyHint::new("b", "back"),
            KeyHint::new("?", "help"),
            KeyHint::new("q", "quit"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.key_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_hints_in_order() {
        let theme = Theme::default();
        let hints = HelpBar::upload_hints();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HelpBar::new(&hints, &theme).render(area, &mut buf);

        let out: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(out.starts_with("Enter:load  Esc:quit  F1:help"));
    }
}
