//! Upload screen: CSV path prompt, loading indicator and ingestion errors

use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use std::path::Path;

/// Upload screen contents
pub struct UploadPanel<'a> {
    input: &'a str,
    cursor: usize,
    loading: Option<&'a Path>,
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> UploadPanel<'a> {
    #[must_use]
    pub const fn new(input: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            input,
            cursor,
            loading: None,
            error: None,
            theme,
        }
    }

    /// Show a loading indicator for `path`
    #[must_use]
    pub const fn loading(mut self, path: Option<&'a Path>) -> Self {
        self.loading = path;
        self
    }

    /// Show an ingestion error
    #[must_use]
    pub const fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Input line with the cursor drawn as a reversed cell
    fn input_line(&self) -> Line<'a> {
        let split = self
            .input
            .char_indices()
            .nth(self.cursor)
            .map_or(self.input.len(), |(i, _)| i);
        let (before, rest) = self.input.split_at(split);
        let mut chars = rest.chars();
        let under = chars.next().map_or_else(|| " ".to_string(), |c| c.to_string());
        let after = chars.as_str();

        Line::from(vec![
            Span::styled("> ", self.theme.key_style()),
            Span::raw(before),
            Span::styled(under, self.theme.normal_style().add_modifier(Modifier::REVERSED)),
            Span::raw(after),
        ])
    }
}

impl Widget for UploadPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style())
            .title(Line::styled(" Upload your Flashcards ", self.theme.title_style()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, intro, input, _, status, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let intro_lines = vec![
            Line::raw("Enter the path to a CSV file and press Enter."),
            Line::styled(
                "Format: \"question\", \"answer\" (also front/back, term/definition)",
                self.theme.dimmed_style(),
            ),
        ];
        Paragraph::new(intro_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(intro, buf);

        Paragraph::new(self.input_line()).render(input, buf);

        let status_line = if let Some(path) = self.loading {
            Some(Line::styled(
                format!("Loading {}…", path.display()),
                self.theme.info_style(),
            ))
        } else {
            self.error
                .map(|e| Line::styled(format!("✗ {e}"), self.theme.error_style()))
        };
        if let Some(line) = status_line {
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(status, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(panel: UploadPanel<'_>) -> String {
        let area = Rect::new(0, 0, 80, 14);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_shows_input_and_error() {
        let theme = Theme::default();
        let out = render(
            UploadPanel::new("deck.csv", 8, &theme).error(Some("No valid flashcards found.")),
        );
        assert!(out.contains("> deck.csv"));
        assert!(out.contains("No valid flashcards found."));
    }

    #[test]
    fn test_loading_overrides_error() {
        let theme = Theme::default();
        let out = render(
            UploadPanel::new("", 0, &theme)
                .loading(Some(Path::new("big.csv")))
                .error(Some("old error")),
        );
        assert!(out.contains("Loading big.csv"));
        assert!(!out.contains("old error"));
    }
}
