//! Error types for the pager.
//!
//! Errors are structured `thiserror` enums that compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`InputError`] - Opening, reading, or buffering the input stream
//!   - [`TuiError`](crate::view::TuiError) - Terminal setup and rendering failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failures
//!   - [`HandoffError`](crate::handoff::HandoffError) - External viewer launch failures
//!
//! # Recovery Strategy
//!
//! None of these are recoverable. Every one of them ends the process with a
//! diagnostic on stderr and a non-zero exit status. Hitting the first or last
//! line while scrolling is not an error at all: the viewport reports it and the
//! interaction loop rings the bell.

use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to open, read, or buffer the input.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Terminal could not be initialized or rendered to.
    #[error("{0}")]
    Tui(#[from] crate::view::TuiError),

    /// Configuration file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// External viewer could not be launched after the session ended.
    #[error("{0}")]
    Handoff(#[from] crate::handoff::HandoffError),
}

/// Errors encountered while acquiring input and loading it into the line store.
///
/// # Recovery Patterns
///
/// - **FileNotFound / Open**: the user named a path that cannot be opened
/// - **Read**: the stream broke while it was being consumed
/// - **Allocation**: the line store could not grow; the partial store is dropped
/// - **NoInput**: no path and nothing piped on stdin - show usage
/// - **NoTerminal**: stdin was consumed but there is no terminal to read keys from
#[derive(Debug, Error)]
pub enum InputError {
    /// The named input file does not exist.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use ttpager::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.txt"),
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.txt"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// The named input exists but could not be opened (permissions, directory, ...).
    #[error("Cannot open {path}: {source}")]
    Open {
        /// Path as given on the command line.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Reading the stream failed part way through.
    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),

    /// The line store could not reserve room for another line.
    #[error("Out of memory after buffering {lines} lines: {source}")]
    Allocation {
        /// Number of lines successfully buffered before the failure.
        lines: usize,
        /// Reservation failure reported by the allocator.
        #[source]
        source: TryReserveError,
    },

    /// No input path was given and stdin is an interactive terminal.
    ///
    /// ```
    /// use ttpager::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Input came from a pipe and no controlling terminal is available for keys.
    #[error("No controlling terminal available for keyboard input: {0}")]
    NoTerminal(#[source] std::io::Error),
}
