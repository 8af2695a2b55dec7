//! Stdin-based input source for piped data.

use crate::model::error::InputError;
use crate::model::line_store::{IngestOptions, LineStore};
use std::io::{BufRead, BufReader, IsTerminal, Read};

/// Piped standard input, consumed to EOF before the session starts.
pub struct StdinSource {
    reader: Box<dyn BufRead>,
}

impl std::fmt::Debug for StdinSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinSource").finish_non_exhaustive()
    }
}

impl StdinSource {
    /// Take the process's standard input.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY. Paging an interactive
    /// terminal would block until the user typed EOF.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self {
            reader: Box::new(stdin.lock()),
        })
    }

    /// Build a source from any reader, bypassing the TTY check.
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(BufReader::new(reader)),
        }
    }

    /// Read everything up to EOF into a line store.
    ///
    /// # Errors
    ///
    /// Propagates ingestion failures, see [`LineStore::ingest`].
    pub fn load(self, options: IngestOptions) -> Result<LineStore, InputError> {
        LineStore::ingest(self.reader, options)
    }
}

/// Make sure keys can still be read once stdin has been drained.
///
/// When the text arrived through a pipe, stdin is at EOF and keyboard input
/// has to come from the controlling terminal instead. crossterm reads events
/// and toggles raw mode on `/dev/tty` whenever stdin is not a terminal, so the
/// only thing left to check is that such a terminal exists.
///
/// # Errors
///
/// Returns `InputError::NoTerminal` if no controlling terminal can be opened.
#[cfg(unix)]
pub fn ensure_controlling_terminal() -> Result<(), InputError> {
    if std::io::stdin().is_terminal() {
        return Ok(());
    }
    std::fs::File::open("/dev/tty")
        .map(drop)
        .map_err(InputError::NoTerminal)
}

/// Make sure keys can still be read once stdin has been drained.
///
/// On Windows crossterm reads from the console input buffer directly, which
/// does not depend on where stdin points.
///
/// # Errors
///
/// Never fails on this platform.
#[cfg(not(unix))]
pub fn ensure_controlling_terminal() -> Result<(), InputError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_piped_lines() {
        let source = StdinSource::from_reader(&b"first\nsecond\n"[..]);
        let store = source.load(IngestOptions::default()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().as_str(), "1: first");
    }

    #[test]
    fn load_handles_partial_final_line() {
        let source = StdinSource::from_reader(&b"done\npartial"[..]);
        let store = source.load(IngestOptions::default()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().as_str(), "2: partial");
    }

    #[test]
    fn load_of_empty_pipe_is_empty_store() {
        let source = StdinSource::from_reader(&b""[..]);
        let store = source.load(IngestOptions::default()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_does_not_expose_reader() {
        let source = StdinSource::from_reader(&b"x"[..]);
        assert!(format!("{source:?}").starts_with("StdinSource"));
    }
}
