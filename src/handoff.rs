//! External viewer hand-off.
//!
//! Runs after the terminal has been restored. On Unix the pager process is
//! replaced by the viewer; elsewhere the viewer runs as a child and the pager
//! exits when it does.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::info;

/// Viewer used when nothing is configured.
#[cfg(unix)]
pub const DEFAULT_VIEWER: &str = "vi";
/// Viewer used when nothing is configured.
#[cfg(not(unix))]
pub const DEFAULT_VIEWER: &str = "notepad";

/// Errors launching the external viewer.
#[derive(Debug, Error)]
pub enum HandoffError {
    /// The resolved command string had no program in it.
    #[error("Viewer command is empty")]
    EmptyCommand,

    /// The program could not be started.
    #[error("Failed to launch viewer '{program}': {source}")]
    Launch {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A parsed viewer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerCommand {
    program: String,
    args: Vec<OsString>,
}

impl ViewerCommand {
    /// Split `command` on whitespace and append `path` as the last argument.
    pub fn parse(command: &str, path: &Path) -> Result<Self, HandoffError> {
        let mut words = command.split_whitespace();
        let program = words.next().ok_or(HandoffError::EmptyCommand)?.to_string();
        let mut args: Vec<OsString> = words.map(OsString::from).collect();
        args.push(path.as_os_str().to_os_string());
        Ok(Self { program, args })
    }

    /// Program to run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments, ending with the file path.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// Replace the current process with the viewer.
    ///
    /// Only returns on failure.
    #[cfg(unix)]
    pub fn launch(self) -> Result<(), HandoffError> {
        use std::os::unix::process::CommandExt;

        info!(program = %self.program, "Handing off to viewer");
        let source = self.command().exec();
        Err(HandoffError::Launch {
            program: self.program,
            source,
        })
    }

    /// Run the viewer to completion.
    #[cfg(not(unix))]
    pub fn launch(self) -> Result<(), HandoffError> {
        info!(program = %self.program, "Handing off to viewer");
        self.command()
            .status()
            .map(|_| ())
            .map_err(|source| HandoffError::Launch {
                program: self.program.clone(),
                source,
            })
    }
}

/// Pick the viewer command string.
///
/// Order: `configured` (config file or `TTPAGER_VIEWER`), then `VISUAL`,
/// then `EDITOR`, then [`DEFAULT_VIEWER`]. Blank values are skipped.
pub fn resolve_viewer_command(
    configured: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> String {
    configured
        .map(str::to_string)
        .into_iter()
        .chain(env("VISUAL"))
        .chain(env("EDITOR"))
        .find(|candidate| !candidate.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_VIEWER.to_string())
}

/// Resolve the viewer from config and the process environment, then launch it on `path`.
pub fn launch_viewer(configured: Option<&str>, path: &Path) -> Result<(), HandoffError> {
    let command = resolve_viewer_command(configured, |name| std::env::var(name).ok());
    ViewerCommand::parse(&command, path)?.launch()
}
