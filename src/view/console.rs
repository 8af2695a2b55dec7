//! Keyboard input and the audible signal.
//!
//! Rendering goes through ratatui; everything else the pager needs from the
//! terminal sits behind [`Console`] so the event loop can be driven by a
//! script in tests.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io::{self, Write};

/// Source of input events plus the bell.
pub trait Console {
    /// Block until the next terminal event.
    fn next_event(&mut self) -> io::Result<Event>;

    /// Ring the terminal bell.
    fn bell(&mut self) -> io::Result<()>;
}

/// Console backed by crossterm.
///
/// When stdin is a pipe crossterm reads key events from `/dev/tty`.
#[derive(Debug, Default)]
pub struct CrosstermConsole;

impl Console for CrosstermConsole {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }

    fn bell(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}

/// Console that replays a fixed list of events.
///
/// Returns `UnexpectedEof` once the script runs out, which ends a session
/// that never saw a quit key.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    events: VecDeque<Event>,
    bells: usize,
}

impl ScriptedConsole {
    /// Console that will yield `events` in order.
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            bells: 0,
        }
    }

    /// Console yielding key presses for each character of `keys`.
    pub fn from_keys(keys: &str) -> Self {
        Self::new(
            keys.chars()
                .map(|c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))),
        )
    }

    /// Queue another event.
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// How many times the bell has rung.
    pub fn bells(&self) -> usize {
        self.bells
    }

    /// Events not consumed yet.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Console for ScriptedConsole {
    fn next_event(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted"))
    }

    fn bell(&mut self) -> io::Result<()> {
        self.bells += 1;
        Ok(())
    }
}
