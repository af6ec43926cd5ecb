//! Tests for CLI argument parsing.
//!
//! Binary tests only exercise paths that exit before the terminal is touched.

mod common;

use clap::Parser;
use common::temp_config;
use folio::cli::Cli;
use folio::config::Config;
use std::process::Command;

fn folio_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_folio"))
}

#[test]
fn test_help_lists_options() {
    let output = folio_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--owner", "--api-base", "--offline", "--frame-ms"] {
        assert!(stdout.contains(flag), "missing {flag} in help");
    }
}

#[test]
fn test_version_flag() {
    let output = folio_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[typewriter]\nphrases = []\n");
    let output = folio_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"));
    assert!(stderr.contains("At least one typewriter phrase"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = folio_cmd()
        .arg("--no-such-flag")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_overrides_apply_on_top_of_config() {
    let cli = Cli::try_parse_from([
        "folio",
        "--owner",
        "octocat",
        "--api-base",
        "http://127.0.0.1:9000",
        "--frame-ms",
        "33",
        "--offline",
    ])
    .unwrap();
    assert!(cli.offline);

    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config.feed.owner, "octocat");
    assert_eq!(config.feed.api_base, "http://127.0.0.1:9000");
    assert_eq!(config.animation.frame_ms, 33);
}

#[test]
fn test_no_flags_leave_config_untouched() {
    let cli = Cli::try_parse_from(["folio"]).unwrap();
    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_config_reads_file_then_overrides() {
    let (_dir, path) = temp_config("[feed]\nowner = \"from-file\"\nlimit = 3\n");
    let cli = Cli::try_parse_from([
        "folio",
        "--config",
        path.to_str().unwrap(),
        "--frame-ms",
        "40",
    ])
    .unwrap();

    let config = cli.resolve_config().unwrap();
    assert_eq!(config.feed.owner, "from-file");
    assert_eq!(config.feed.limit, 3);
    assert_eq!(config.animation.frame_ms, 40);
}

#[test]
fn test_resolve_config_validates_overrides() {
    let (_dir, path) = temp_config("");
    let cli = Cli::try_parse_from([
        "folio",
        "--config",
        path.to_str().unwrap(),
        "--frame-ms",
        "0",
    ])
    .unwrap();

    let err = cli.resolve_config().unwrap_err();
    assert!(err.to_string().contains("animation.frame_ms"));
}
