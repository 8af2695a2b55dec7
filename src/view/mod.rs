//! TUI rendering and terminal management (impure shell)

pub mod console;
pub mod screen;
pub mod status_bar;
pub mod styles;

pub use console::{Console, CrosstermConsole, ScriptedConsole};
pub use screen::{Screen, TuiScreen};
pub use styles::{Attr, BarStyles};

use crate::config::{KeyBindings, ResizePolicy};
use crate::model::line_store::LineStore;
use crate::model::KeyAction;
use crate::source::SourceDescriptor;
use crate::state::{handle_scroll_action, AppState};
use crate::view_state::types::{ViewportDimensions, STATUS_BAR_HEIGHT};
use crate::view_state::viewport::ScrollOutcome;
use crossterm::{
    cursor::{Hide, Show},
    event::{Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// The terminal could not be put into raw/alternate-screen mode.
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(#[source] io::Error),

    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Why a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user quit.
    Quit,
    /// The terminal changed size under the `exit` resize policy.
    Resized,
    /// The user asked to open this file in the external viewer.
    HandOff(PathBuf),
}

/// Session options that come from configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Start with line numbers shown.
    pub line_numbers: bool,
    /// Behaviour on terminal resize.
    pub on_resize: ResizePolicy,
    /// Key table.
    pub key_bindings: KeyBindings,
}

/// The interaction loop: input events in, screen updates out.
///
/// Generic over [`Screen`] so tests can drive it with a `TestBackend` and a
/// scripted console.
pub struct PagerApp<S: Screen> {
    state: AppState,
    screen: S,
    key_bindings: KeyBindings,
    on_resize: ResizePolicy,
}

impl<S: Screen> PagerApp<S> {
    /// Session over `store`, sized to `screen`.
    pub fn new(screen: S, store: LineStore, source: SourceDescriptor, options: SessionOptions) -> Self {
        let (cols, rows) = screen.size();
        let state = AppState::new(
            store,
            source,
            ViewportDimensions::for_terminal(cols, rows),
            options.line_numbers,
        );
        Self {
            state,
            screen,
            key_bindings: options.key_bindings,
            on_resize: options.on_resize,
        }
    }

    /// Current session state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The screen being drawn on.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Paint the first page and the status line.
    pub fn start(&mut self) -> Result<(), TuiError> {
        self.paint_all();
        self.screen.present()?;
        Ok(())
    }

    /// Paint the first page and process events until the session ends.
    pub fn run(&mut self) -> Result<SessionEnd, TuiError> {
        self.start()?;
        loop {
            let event = self.screen.next_event()?;
            if let Some(end) = self.handle_event(event)? {
                return Ok(end);
            }
        }
    }

    /// Handle one terminal event; `Some` ends the session.
    ///
    /// Mouse, focus and paste events are ignored.
    pub fn handle_event(&mut self, event: Event) -> Result<Option<SessionEnd>, TuiError> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(cols, rows) => self.handle_resize(cols, rows),
            _ => Ok(None),
        }
    }

    /// Handle one key event; `Some` ends the session.
    ///
    /// Only key presses count. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SessionEnd>, TuiError> {
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }
        let Some(action) = self.key_bindings.get(key) else {
            return Ok(None);
        };

        match action {
            KeyAction::Quit => {
                info!("Quit requested");
                Ok(Some(SessionEnd::Quit))
            }
            KeyAction::OpenInViewer => Ok(self
                .state
                .source()
                .path()
                .map(|path| SessionEnd::HandOff(path.to_path_buf()))),
            KeyAction::ToggleHelp => {
                self.state.toggle_help();
                self.paint_status();
                self.screen.present()?;
                Ok(None)
            }
            _ => {
                if let Some(outcome) = handle_scroll_action(&mut self.state, action) {
                    self.apply_scroll(action, outcome)?;
                }
                Ok(None)
            }
        }
    }

    fn handle_resize(&mut self, cols: u16, rows: u16) -> Result<Option<SessionEnd>, TuiError> {
        match self.on_resize {
            ResizePolicy::Exit => {
                info!(cols, rows, "Terminal resized, ending session");
                Ok(Some(SessionEnd::Resized))
            }
            ResizePolicy::Reflow => {
                info!(cols, rows, "Terminal resized, reflowing");
                self.screen.resize(cols, rows)?;
                self.state
                    .viewport
                    .resize(ViewportDimensions::for_terminal(cols, rows));
                self.paint_all();
                self.screen.present()?;
                Ok(None)
            }
        }
    }

    fn apply_scroll(&mut self, action: KeyAction, outcome: ScrollOutcome) -> Result<(), TuiError> {
        if outcome.at_boundary {
            self.screen.bell()?;
        }

        let rows = self.state.viewport.rows();
        let line_step = matches!(action, KeyAction::ScrollDown | KeyAction::ScrollUp);
        let distance = outcome.delta.unsigned_abs();

        if line_step && distance > 0 && distance < rows {
            self.screen.scroll_region(to_row(rows), outcome.delta);
            let exposed = if outcome.delta > 0 {
                rows - distance..rows
            } else {
                0..distance
            };
            self.paint_rows(exposed);
        } else if outcome.moved() {
            self.paint_rows(0..rows);
        }

        self.paint_status();
        self.screen.present()?;
        Ok(())
    }

    fn paint_all(&mut self) {
        debug!(
            offset = self.state.viewport.scroll_offset(),
            rows = self.state.viewport.rows(),
            "Full repaint"
        );
        self.paint_rows(0..self.state.viewport.rows());
        self.paint_status();
    }

    /// Row holding the status bar: the bottom row of the screen. On a
    /// terminal too short for both, the status bar wins and no text is drawn.
    fn status_row(&self) -> u16 {
        self.screen.size().1.saturating_sub(STATUS_BAR_HEIGHT)
    }

    fn paint_rows(&mut self, rows: Range<usize>) {
        let text_rows = usize::from(self.status_row());
        for row in rows.filter(|&row| row < text_rows) {
            let screen_row = to_row(row);
            self.screen.clear_row(screen_row);
            if let Some(text) = self.state.row_text(row) {
                self.screen.write_clipped(screen_row, 0, text, Attr::Normal);
            }
        }
    }

    fn paint_status(&mut self) {
        let (text, attr) = if self.state.help_visible {
            (status_bar::HELP_TEXT.to_string(), Attr::HelpBar)
        } else {
            let name = self.state.source().display_name();
            let position = self.state.viewport.position();
            (status_bar::status_text(name, position), Attr::StatusBar)
        };
        let row = self.status_row();
        let line = status_bar::fit_to_width(&text, self.state.viewport.cols());
        self.screen.clear_row(row);
        self.screen.write_clipped(row, 0, &line, attr);
    }
}

fn to_row(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Screen type used for a real terminal.
pub type TerminalScreen = TuiScreen<CrosstermBackend<Stdout>, CrosstermConsole>;

/// Enter raw mode and the alternate screen, hide the cursor.
///
/// On failure the terminal is restored before returning.
pub fn init_terminal(styles: BarStyles) -> Result<TerminalScreen, TuiError> {
    enable_raw_mode().map_err(TuiError::TerminalInit)?;

    let setup = || -> io::Result<TerminalScreen> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        TuiScreen::new(CrosstermBackend::new(stdout), CrosstermConsole, styles)
    };

    setup().map_err(|e| {
        let _ = restore_terminal();
        TuiError::TerminalInit(e)
    })
}

/// Restore terminal to normal state
///
/// Leaves the alternate screen, disables raw mode, and shows the cursor.
pub fn restore_terminal() -> Result<(), TuiError> {
    let mut stdout = io::stdout();
    let screen = execute!(stdout, LeaveAlternateScreen, Show);
    disable_raw_mode()?;
    screen?;
    Ok(())
}

/// Run one pager session on the real terminal.
///
/// The terminal is restored on every path out, including errors, before the
/// session end is reported.
pub fn run_with_source(
    store: LineStore,
    source: SourceDescriptor,
    options: SessionOptions,
    styles: BarStyles,
) -> Result<SessionEnd, TuiError> {
    let screen = init_terminal(styles)?;
    let (cols, rows) = screen.size();
    info!(cols, rows, lines = store.len(), source = %source.display_name(), "Session started");

    let mut app = PagerApp::new(screen, store, source, options);
    let result = app.run();
    drop(app);

    let restored = restore_terminal();
    let end = result?;
    restored?;

    info!(?end, "Session ended");
    Ok(end)
}

#[cfg(test)]
#[path = "pager_tests.rs"]
mod tests;
