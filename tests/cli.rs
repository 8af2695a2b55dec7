//! Integration test: startup failures exit with status 1 and a diagnostic

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn log_file(name: &str) -> PathBuf {
    env::temp_dir().join("ttpager_cli_logs").join(name)
}

fn run_pager(args: &[&str], config: &str, log: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ttpager"))
        .args(args)
        .env("TTPAGER_CONFIG", config)
        .env("TTPAGER_LOG_FILE", log_file(log))
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn missing_file_exits_with_status_one() {
    let output = run_pager(
        &["/nonexistent/ttpager/input.txt"],
        "/nonexistent/ttpager/config.toml",
        "missing.log",
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("* ERROR: "), "got: {stderr}");
    assert!(stderr.contains("/nonexistent/ttpager/input.txt"), "got: {stderr}");
}

#[test]
fn invalid_config_exits_with_status_one() {
    let config_path = env::temp_dir().join("ttpager_cli_bad_config.toml");
    fs::write(&config_path, "on_resize = [").expect("Failed to write config");

    let output = run_pager(
        &["Cargo.toml"],
        config_path.to_str().expect("temp path is UTF-8"),
        "bad_config.log",
    );
    fs::remove_file(&config_path).ok();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Invalid TOML"), "got: {stderr}");
}

#[test]
fn unknown_flag_is_usage_error() {
    let output = run_pager(
        &["--follow"],
        "/nonexistent/ttpager/config.toml",
        "usage.log",
    );
    assert_eq!(output.status.code(), Some(2));
}
