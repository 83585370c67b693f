//! Deck progress and filter indicators

use crate::deck::Progress;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

/// Counter, progress gauge, learned count and filter state
pub struct Controls<'a> {
    progress: Option<Progress>,
    learned_count: usize,
    hide_learned: bool,
    theme: &'a Theme,
}

impl<'a> Controls<'a> {
    #[must_use]
    pub const fn new(
        progress: Option<Progress>,
        learned_count: usize,
        hide_learned: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            progress,
            learned_count,
            hide_learned,
            theme,
        }
    }

    /// "position / total" text, or a dash when nothing is visible
    #[must_use]
    pub fn counter_text(progress: Option<Progress>) -> String {
        progress.map_or_else(
            || "– / 0".to_string(),
            |p| format!("{} / {}", p.position, p.total),
        )
    }
}

impl Widget for Controls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [counter_area, gauge_area, info_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Line::styled(
            Self::counter_text(self.progress),
            self.theme.title_style(),
        ))
        .alignment(Alignment::Center)
        .render(counter_area, buf);

        Gauge::default()
            .gauge_style(self.theme.gauge_style())
            .ratio(self.progress.map_or(0.0, |p| p.ratio()))
            .label("")
            .render(gauge_area, buf);

        let filter = if self.hide_learned {
            Span::styled("Hiding learned", self.theme.warning_style())
        } else {
            Span::styled("Showing all", self.theme.info_style())
        };
        let info = Line::from(vec![
            Span::styled("Learned: ", self.theme.dimmed_style()),
            Span::styled(self.learned_count.to_string(), self.theme.learned_style()),
            Span::styled("  •  ", self.theme.dimmed_style()),
            filter,
        ]);
        Paragraph::new(info)
            .alignment(Alignment::Center)
            .render(info_area, buf);
    }
}
