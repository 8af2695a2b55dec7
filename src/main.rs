//! ttpager - Entry Point

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use ttpager::model::{AppError, IngestOptions};
use ttpager::source::{detect_input_source, ensure_controlling_terminal, InputSource};
use ttpager::view::{BarStyles, SessionEnd, SessionOptions};

const CONTROLS: &str = "\
Controls:
    j, Down, Enter          scroll down one line
    k, Up                   scroll up one line
    Space, PageDown         scroll down one page
    b, PageUp               scroll up one page
    g, Home                 go to first line
    G, End                  go to last line
    v                       open file in viewer and exit
    ?                       toggle key help
    q, Esc, Ctrl+C          quit";

/// ttpager - page through a file or piped text
#[derive(Parser, Debug)]
#[command(name = "ttpager")]
#[command(version)]
#[command(about = "Line-oriented terminal pager for files and piped input")]
#[command(after_help = CONTROLS)]
pub struct Args {
    /// File to view (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Show line numbers
    #[arg(short = 'n', long)]
    pub line_numbers: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Rewrite `/?`, `/V` and `/N` (any case) to their long forms.
///
/// The program name is left alone.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let program = args.next();
    program
        .into_iter()
        .chain(args.map(|arg| {
            let long = match arg.to_str().map(str::to_ascii_uppercase).as_deref() {
                Some("/?") => "--help",
                Some("/V") => "--version",
                Some("/N") => "--line-numbers",
                _ => return arg,
            };
            OsString::from(long)
        }))
        .collect()
}

fn main() -> ExitCode {
    let args = Args::parse_from(normalize_args(std::env::args_os()));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("* ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = ttpager::config::load_config_with_precedence(args.config.clone())?;
        let merged = ttpager::config::merge_config(config_file);
        let with_env = ttpager::config::apply_env_overrides(merged);

        let line_numbers_override = args.line_numbers.then_some(true);
        let color_override = args.no_color.then_some(false);
        ttpager::config::apply_cli_overrides(with_env, line_numbers_override, color_override)
    };

    ttpager::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = detect_input_source(args.file.clone())?;
    let descriptor = input_source.descriptor();
    let from_pipe = matches!(input_source, InputSource::Stdin(_));

    let store = input_source.load(IngestOptions {
        max_line_length: config.max_line_length,
        tab_width: config.tab_width,
    })?;
    info!(
        source = %descriptor.display_name(),
        lines = store.len(),
        "Input loaded"
    );

    if from_pipe {
        ensure_controlling_terminal()?;
    }

    let options = SessionOptions {
        line_numbers: config.line_numbers,
        on_resize: config.on_resize,
        ..SessionOptions::default()
    };
    let end = ttpager::view::run_with_source(store, descriptor, options, BarStyles::new(config.color))?;

    if let SessionEnd::HandOff(path) = end {
        info!(path = %path.display(), "Opening external viewer");
        ttpager::handoff::launch_viewer(config.viewer.as_deref(), &path).inspect_err(|e| {
            warn!(error = %e, "Viewer hand-off failed");
        })?;
    }

    Ok(())
}
