//! Flashcard widget
//!
//! Renders one side of the current card, plus the "all caught up" panel
//! shown when every visible card has been hidden as learned.

use crate::deck::FlashcardRecord;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// The current card, question or answer side
pub struct CardView<'a> {
    card: &'a FlashcardRecord,
    flipped: bool,
    learned: bool,
    theme: &'a Theme,
}

impl<'a> CardView<'a> {
    #[must_use]
    pub const fn new(card: &'a FlashcardRecord, flipped: bool, learned: bool, theme: &'a Theme) -> Self {
        Self {
            card,
            flipped,
            learned,
            theme,
        }
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (label, text, text_style) = if self.flipped {
            (" Answer ", self.card.answer.as_str(), self.theme.answer_style())
        } else {
            (" Question ", self.card.question.as_str(), self.theme.question_style())
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.flipped {
                self.theme.info_style()
            } else {
                self.theme.border_style()
            })
            .title(Line::styled(label, self.theme.title_style()));
        if self.learned {
            block = block.title(
                Line::styled(" ✓ Learned ", self.theme.learned_style()).right_aligned(),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        // Vertically centre the text, leaving the last row for the flip hint
        let [_, body, _, hint] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Max(inner.height.saturating_sub(2)),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(text)
            .style(text_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);

        let hint_text = if self.flipped {
            "Space to see question"
        } else {
            "Space to reveal answer"
        };
        Paragraph::new(Line::styled(hint_text, self.theme.dimmed_style()))
            .alignment(Alignment::Center)
            .render(hint, buf);
    }
}

/// Shown when hiding learned cards leaves nothing to study
pub struct CaughtUpPanel<'a> {
    theme: &'a Theme,
}

impl<'a> CaughtUpPanel<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for CaughtUpPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.success_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::styled(
                "🎉 All Caught Up!",
                self.theme.success_style().add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::raw("You've marked all cards as learned. Great job!"),
            Line::default(),
            Line::from(vec![
                Span::styled("a", self.theme.key_style()),
                Span::styled(" / ", self.theme.dimmed_style()),
                Span::styled("Enter", self.theme.key_style()),
                Span::raw(": Review All Cards"),
            ]),
        ];

        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}
