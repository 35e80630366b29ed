//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("mdabbr")
        .arg("parse")
        .write_stdin("HTML\n\n*[HTML]: Hyper Text Markup Language\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DOCUMENT"))
        .stdout(predicate::str::contains("ABBR_DEFINITION_LABEL_TEXT"))
        .stdout(predicate::str::contains("ABBR_DEFINITION_VALUE_TEXT"));
}

#[test]
fn test_parse_json_resolves_references() {
    cargo_bin_cmd!("mdabbr")
        .args(["parse", "--json"])
        .write_stdin("I like HTML\n\n*[HTML]: Hyper Text Markup Language\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"abbr\""))
        .stdout(predicate::str::contains("\"type\": \"abbrDefinition\""))
        .stdout(predicate::str::contains("\"hName\": \"abbr\""));
}

#[test]
fn test_parse_with_config_disabling_abbreviations() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join(".mdabbr.toml");

    fs::write(&test_file, "*[HTML]: Hyper Text Markup Language\n").unwrap();
    fs::write(&config_file, "[extensions]\nabbreviations = false\n").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("PARAGRAPH"))
        .stdout(predicate::str::contains("ABBR_DEFINITION").not());
}

#[test]
fn test_parse_json_without_positions() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join("mdabbr.toml");

    fs::write(&test_file, "HTML\n\n*[HTML]: Hyper Text Markup Language\n").unwrap();
    fs::write(&config_file, "positions = false\n").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args([
            "parse",
            "--json",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"position\"").not());
}
