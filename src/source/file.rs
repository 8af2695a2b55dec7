//! File-based input source.
//!
//! The file is opened eagerly so that a bad path fails before the terminal is
//! touched, then read to EOF exactly once.

use crate::model::error::InputError;
use crate::model::line_store::{IngestOptions, LineStore};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// An opened input file waiting to be loaded.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    reader: BufReader<File>,
}

impl FileSource {
    /// Open the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if nothing exists at `path` and
    /// `InputError::Open` for any other open failure.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    /// Path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into a line store. The file is closed afterwards.
    ///
    /// # Errors
    ///
    /// Propagates ingestion failures, see [`LineStore::ingest`].
    pub fn load(self, options: IngestOptions) -> Result<LineStore, InputError> {
        LineStore::ingest(self.reader, options)
    }
}
