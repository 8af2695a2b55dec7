//! Configuration file loading with precedence handling.

use crate::model::line_store::{DEFAULT_MAX_LINE_LENGTH, DEFAULT_TAB_WIDTH};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TTPAGER_CONFIG";
/// Environment variable overriding the external viewer command.
pub const VIEWER_ENV: &str = "TTPAGER_VIEWER";
/// Environment variable overriding the log file location.
pub const LOG_FILE_ENV: &str = "TTPAGER_LOG_FILE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, is a directory, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// What to do when the terminal changes size mid-session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizePolicy {
    /// End the session cleanly.
    #[default]
    Exit,
    /// Adopt the new size, re-clamp the scroll offset, and repaint.
    Reflow,
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/ttpager/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Show line numbers by default.
    #[serde(default)]
    pub line_numbers: Option<bool>,

    /// Tab stop distance for expanding tabs (0 keeps raw tabs).
    #[serde(default)]
    pub tab_width: Option<usize>,

    /// Characters kept per line before truncation (0 = unlimited).
    #[serde(default)]
    pub max_line_length: Option<usize>,

    /// Command used by the `v` key, e.g. `"nvim -R"`.
    #[serde(default)]
    pub viewer: Option<String>,

    /// Behaviour on terminal resize.
    #[serde(default)]
    pub on_resize: Option<ResizePolicy>,

    /// Use colored status and help bars.
    #[serde(default)]
    pub color: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Show line numbers.
    pub line_numbers: bool,
    /// Tab stop distance.
    pub tab_width: usize,
    /// Per-line character cap.
    pub max_line_length: usize,
    /// Explicit viewer command; `None` falls back to `$VISUAL`/`$EDITOR`.
    pub viewer: Option<String>,
    /// Behaviour on terminal resize.
    pub on_resize: ResizePolicy,
    /// Colored bars.
    pub color: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            line_numbers: false,
            tab_width: DEFAULT_TAB_WIDTH,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            viewer: None,
            on_resize: ResizePolicy::Exit,
            color: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/ttpager/ttpager.log` on Linux, or the platform
/// equivalent. Falls back to the current directory if there is no state
/// directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("ttpager").join("ttpager.log")
    } else {
        PathBuf::from("ttpager.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/ttpager/config.toml` on Linux, the platform equivalent
/// elsewhere, `None` if there is no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ttpager").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TTPAGER_CONFIG` environment variable
/// 3. Default path `~/.config/ttpager/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        line_numbers: config.line_numbers.unwrap_or(defaults.line_numbers),
        tab_width: config.tab_width.unwrap_or(defaults.tab_width),
        max_line_length: config.max_line_length.unwrap_or(defaults.max_line_length),
        viewer: config.viewer.or(defaults.viewer),
        on_resize: config.on_resize.unwrap_or(defaults.on_resize),
        color: config.color.unwrap_or(defaults.color),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TTPAGER_VIEWER`: viewer command
/// - `TTPAGER_LOG_FILE`: log file path
/// - `NO_COLOR`: any value disables colors
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(viewer) = std::env::var(VIEWER_ENV) {
        if !viewer.trim().is_empty() {
            config.viewer = Some(viewer);
        }
    }

    if let Some(log_file) = std::env::var_os(LOG_FILE_ENV) {
        config.log_file_path = PathBuf::from(log_file);
    }

    if std::env::var_os("NO_COLOR").is_some() {
        config.color = false;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually set are
/// passed as `Some`.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    line_numbers_override: Option<bool>,
    color_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(line_numbers) = line_numbers_override {
        config.line_numbers = line_numbers;
    }

    if let Some(color) = color_override {
        config.color = color;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
