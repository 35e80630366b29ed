//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("mdabbr")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("abbreviation definitions"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("mdabbr")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("mdabbr")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("mdabbr")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_format_help() {
    cargo_bin_cmd!("mdabbr")
        .args(["format", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Round-trip a Markdown document"));
}

#[test]
fn test_lint_help() {
    cargo_bin_cmd!("mdabbr")
        .args(["lint", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report abbreviation definitions"));
}

#[test]
fn test_missing_explicit_config_fails() {
    cargo_bin_cmd!("mdabbr")
        .args(["parse", "--config", "/nonexistent/mdabbr.toml"])
        .write_stdin("HTML")
        .assert()
        .failure();
}
