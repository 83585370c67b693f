//! Study TUI application
//!
//! Owns the [`Session`] for the lifetime of the terminal UI and drives the
//! draw / poll / apply loop. Ingestion results from the background loader
//! are drained at the top of every iteration.

use super::events::{EventResult, poll_and_handle};
use super::loader::{IngestLoader, LoadResult};
use super::state::{Mode, PendingLoad, TuiState};
use super::theme::Theme;
use super::widgets::{
    CardView, CaughtUpPanel, ConfirmDialog, Controls, HelpBar, HelpOverlay, StatusBar,
    UploadPanel,
};
use crate::session::{IngestOutcome, Session};
use crate::ui::error::Result;
use crate::ui::output::MessageLevel;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal study application
pub struct StudyApp {
    session: Session,
    state: TuiState,
    loader: IngestLoader,
    theme: Theme,
}

impl StudyApp {
    #[must_use]
    pub fn new(session: Session, message_ttl: Duration) -> Self {
        Self {
            session,
            state: TuiState::new(message_ttl),
            loader: IngestLoader::new(),
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn state(&self) -> &TuiState {
        &self.state
    }

    /// Start ingesting `path` in the background, superseding any load in flight
    pub fn start_ingest(&mut self, path: PathBuf) {
        let ticket = self.session.begin_ingest();
        self.state.upload_error = None;
        self.state.loading = Some(PendingLoad {
            ticket,
            path: path.clone(),
        });
        self.loader.spawn(ticket, path);
    }

    /// Apply every finished ingestion
    pub fn drain_loader(&mut self) {
        while let Some(loaded) = self.loader.try_next() {
            self.apply_load(loaded);
        }
    }

    fn apply_load(&mut self, loaded: LoadResult) {
        let LoadResult {
            ticket,
            path,
            result,
        } = loaded;
        let latest = self.session.is_latest(ticket);

        match self.session.complete_ingest(ticket, result) {
            IngestOutcome::Loaded { cards } => {
                self.state.upload_error = None;
                self.state.add_message(
                    MessageLevel::Success,
                    format!("Loaded {cards} card(s) from {}", display_name(&path)),
                );
            }
            IngestOutcome::Failed(e) => {
                log::debug!("failed to load {}: {e}", path.display());
                self.state.upload_error = Some(e.to_string());
            }
            IngestOutcome::Stale => {}
        }

        if latest {
            self.state.loading = None;
        }
        self.state
            .sync_flip(self.session.current().map(|c| c.id.as_str()));
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the TUI until the user quits, optionally loading `initial` first
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up, drawn to or polled.
    pub fn run(mut self, initial: Option<PathBuf>) -> Result<()> {
        if let Some(path) = initial {
            self.state.set_path(&path.to_string_lossy());
            self.start_ingest(path);
        }

        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal);

        // Always restore the terminal, even on error
        if let Err(e) = Self::cleanup_terminal() {
            log::error!("terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.state.should_exit {
            self.drain_loader();
            self.state.cleanup_messages();

            terminal.draw(|frame| draw_ui(frame, &self.session, &self.state, &self.theme))?;

            match poll_and_handle(&mut self.state, &mut self.session, POLL_INTERVAL)? {
                EventResult::Submit(path) => self.start_ingest(path),
                EventResult::Quit => self.state.should_exit = true,
                EventResult::Continue | EventResult::Ignored => {}
            }
        }
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Draw the whole screen for the current session and presentation state
pub fn draw_ui(frame: &mut Frame, session: &Session, state: &TuiState, theme: &Theme) {
    let area = frame.area();

    let [header, content, status, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, session, theme, header);

    let hints = if session.is_studying() {
        render_study(frame, session, state, theme, content);
        HelpBar::study_hints()
    } else {
        render_upload(frame, state, theme, content);
        HelpBar::upload_hints()
    };

    let messages = state.active_messages();
    let label = if session.is_studying() { "Study" } else { "Upload" };
    frame.render_widget(
        StatusBar::new(&messages, theme).with_label(Some(label)),
        status,
    );
    frame.render_widget(HelpBar::new(&hints, theme), help);

    match state.mode {
        Mode::Help => frame.render_widget(HelpOverlay::new(theme), area),
        Mode::Confirm => {
            if let Some(dialog) = &state.confirm_state {
                frame.render_widget(ConfirmDialog::new(dialog, theme), area);
            }
        }
        Mode::Normal => {}
    }
}

fn render_header(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let mut spans = vec![Span::styled(" ⚡ FlashMaster", theme.title_style())];
    if session.is_studying() {
        spans.push(Span::styled(
            format!("  {} card(s)", session.store().deck().len()),
            theme.dimmed_style(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_upload(frame: &mut Frame, state: &TuiState, theme: &Theme, area: Rect) {
    let panel = UploadPanel::new(&state.path_input, state.path_cursor, theme)
        .loading(state.loading.as_ref().map(|p| p.path.as_path()))
        .error(state.upload_error.as_deref());
    frame.render_widget(panel, area);
}

fn render_study(frame: &mut Frame, session: &Session, state: &TuiState, theme: &Theme, area: Rect) {
    let [card_area, controls_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(area);

    let store = session.store();
    match session.current() {
        Some(card) => frame.render_widget(
            CardView::new(card, state.flipped, store.is_learned(&card.id), theme),
            card_area,
        ),
        None if store.deck().is_empty() => frame.render_widget(
            Paragraph::new("No cards").alignment(Alignment::Center),
            card_area,
        ),
        None => frame.render_widget(CaughtUpPanel::new(theme), card_area),
    }

    frame.render_widget(
        Controls::new(
            store.progress(),
            store.learned_count(),
            store.hide_learned(),
            theme,
        ),
        controls_area,
    );
}
