//! Input sources.
//!
//! This module provides the two places text can come from:
//! - File loading for a named path
//! - Stdin for piped input
//!
//! and the [`SourceDescriptor`] that names the input on the status bar.

use crate::model::error::InputError;
use crate::model::line_store::{IngestOptions, LineStore};
use std::path::{Path, PathBuf};

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::{ensure_controlling_terminal, StdinSource};

/// Display name used when reading from standard input.
pub const PIPE_NAME: &str = "pipe";

/// Identity of the input, fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    display_name: String,
    path: Option<PathBuf>,
}

impl SourceDescriptor {
    /// Descriptor for a named file; the display name is its final component.
    pub fn for_path(path: &Path) -> Self {
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            display_name,
            path: Some(path.to_path_buf()),
        }
    }

    /// Descriptor for piped standard input.
    pub fn pipe() -> Self {
        Self {
            display_name: PIPE_NAME.to_string(),
            path: None,
        }
    }

    /// Name shown on the status bar.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Path of the input file, `None` for piped input.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the text came from a pipe.
    pub fn is_pipe(&self) -> bool {
        self.path.is_none()
    }
}

/// Unified input source.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// A named file
    File(FileSource),
    /// Piped standard input
    Stdin(StdinSource),
}

impl InputSource {
    /// Descriptor naming this source.
    pub fn descriptor(&self) -> SourceDescriptor {
        match self {
            InputSource::File(f) => SourceDescriptor::for_path(f.path()),
            InputSource::Stdin(_) => SourceDescriptor::pipe(),
        }
    }

    /// Consume the source into a line store.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for read or allocation failures.
    pub fn load(self, options: IngestOptions) -> Result<LineStore, InputError> {
        match self {
            InputSource::File(f) => f.load(options),
            InputSource::Stdin(s) => s.load(options),
        }
    }
}

/// Detect and create the appropriate input source.
///
/// # Logic:
/// 1. If a file path is provided: open it (fatal if it cannot be opened)
/// 2. Else if stdin is piped: use it
/// 3. Else: `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::FileNotFound` / `InputError::Open` for a bad path and
/// `InputError::NoInput` if there is no path and stdin is a terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
