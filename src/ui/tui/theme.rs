//! Color theme definitions for the study TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for titles and the progress gauge
    pub accent: Color,
    /// Color for question text
    pub question: Color,
    /// Color for answer text
    pub answer: Color,
    /// Color for the learned badge
    pub learned: Color,
    /// Color for key hints
    pub key: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Indexed(99),
            question: Color::White,
            answer: Color::LightCyan,
            learned: Color::Green,
            key: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the application title
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the question side of a card
    #[must_use]
    pub fn question_style(&self) -> Style {
        Style::default()
            .fg(self.question)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the answer side of a card
    #[must_use]
    pub fn answer_style(&self) -> Style {
        Style::default().fg(self.answer)
    }

    /// Style for the learned badge
    #[must_use]
    pub fn learned_style(&self) -> Style {
        Style::default()
            .fg(self.learned)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key names in hints
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default()
            .fg(self.key)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the progress gauge fill
    #[must_use]
    pub fn gauge_style(&self) -> Style {
        Style::default().fg(self.accent).bg(Color::Black)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
