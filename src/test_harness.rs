//! Acceptance test harness for TUI testing
//!
//! Wraps a `PagerApp` over `TestBackend` with convenient methods for
//! simulating key presses and reading back the rendered screen.

#![allow(dead_code)]

use crate::config::ResizePolicy;
use crate::model::line_store::{IngestOptions, LineStore};
use crate::source::SourceDescriptor;
use crate::state::AppState;
use crate::view::{
    BarStyles, PagerApp, ScriptedConsole, SessionEnd, SessionOptions, TuiScreen,
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::TestBackend;
use std::path::Path;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// `count` lines reading `line 1`, `line 2`, ...
pub fn numbered_text(count: usize) -> String {
    (1..=count).map(|n| format!("line {n}\n")).collect()
}

type TestApp = PagerApp<TuiScreen<TestBackend, ScriptedConsole>>;

/// Test harness for acceptance testing
pub struct PagerHarness {
    app: TestApp,
    ended: Option<SessionEnd>,
}

impl PagerHarness {
    /// Page `text` as file `notes.txt` on a `width` x `height` terminal.
    pub fn from_text(text: &str, width: u16, height: u16) -> Self {
        Self::build(
            text,
            SourceDescriptor::for_path(Path::new("docs/notes.txt")),
            width,
            height,
            SessionOptions::default(),
        )
    }

    /// Page `text` as piped input.
    pub fn from_pipe(text: &str, width: u16, height: u16) -> Self {
        Self::build(
            text,
            SourceDescriptor::pipe(),
            width,
            height,
            SessionOptions::default(),
        )
    }

    /// Page `text` with explicit session options.
    pub fn with_options(text: &str, width: u16, height: u16, options: SessionOptions) -> Self {
        Self::build(
            text,
            SourceDescriptor::for_path(Path::new("docs/notes.txt")),
            width,
            height,
            options,
        )
    }

    /// Page `text` with line numbers shown from the start.
    pub fn numbered(text: &str, width: u16, height: u16) -> Self {
        Self::with_options(
            text,
            width,
            height,
            SessionOptions {
                line_numbers: true,
                ..SessionOptions::default()
            },
        )
    }

    /// Page `text` with terminal resizes reflowing instead of exiting.
    pub fn reflowing(text: &str, width: u16, height: u16) -> Self {
        Self::with_options(
            text,
            width,
            height,
            SessionOptions {
                on_resize: ResizePolicy::Reflow,
                ..SessionOptions::default()
            },
        )
    }

    fn build(
        text: &str,
        source: SourceDescriptor,
        width: u16,
        height: u16,
        options: SessionOptions,
    ) -> Self {
        let store = LineStore::ingest(text.as_bytes(), IngestOptions::default())
            .expect("in-memory ingest should succeed");
        let screen = TuiScreen::new(
            TestBackend::new(width, height),
            ScriptedConsole::default(),
            BarStyles::new(false),
        )
        .expect("TestBackend terminal should initialize");

        let mut app = PagerApp::new(screen, store, source, options);
        app.start().expect("initial paint should succeed");
        Self { app, ended: None }
    }

    /// Send a single key press; returns how the session ended, if it did.
    pub fn send_key(&mut self, key: KeyCode) -> Option<SessionEnd> {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> Option<SessionEnd> {
        self.send_event(Event::Key(KeyEvent::new(key, mods)))
    }

    /// Send a key release, which the pager must ignore.
    pub fn send_release(&mut self, key: KeyCode) -> Option<SessionEnd> {
        let mut event = KeyEvent::new(key, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        self.send_event(Event::Key(event))
    }

    /// Send any terminal event.
    pub fn send_event(&mut self, event: Event) -> Option<SessionEnd> {
        if self.ended.is_some() {
            return self.ended.clone();
        }
        self.ended = self
            .app
            .handle_event(event)
            .expect("event handling should succeed on TestBackend");
        self.ended.clone()
    }

    /// Press each character of `keys` in order, stopping if the session ends.
    pub fn type_keys(&mut self, keys: &str) -> Option<SessionEnd> {
        for ch in keys.chars() {
            if let Some(end) = self.send_key(KeyCode::Char(ch)) {
                return Some(end);
            }
        }
        None
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.state()
    }

    /// Current scroll offset.
    pub fn offset(&self) -> usize {
        self.app.state().viewport.scroll_offset()
    }

    /// Times the bell has rung.
    pub fn bells(&self) -> usize {
        self.app.screen().console().bells()
    }

    /// The rendered terminal as text, empty rows dropped.
    pub fn render_to_string(&self) -> String {
        buffer_to_string(self.app.screen().backend().buffer())
    }

    /// One rendered row, trailing spaces trimmed.
    pub fn row(&self, y: u16) -> String {
        let buffer = self.app.screen().backend().buffer();
        let area = buffer.area();
        (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// The bottom row.
    pub fn status_row(&self) -> String {
        let height = self.app.screen().backend().buffer().area().height;
        self.row(height.saturating_sub(1))
    }
}
