//! Format subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_format_stdin_to_stdout() {
    cargo_bin_cmd!("mdabbr")
        .arg("format")
        .write_stdin("I like HTML\n\n*[HTML]:Hyper Text Markup Language")
        .assert()
        .success()
        .stdout("I like HTML\n\n*[HTML]: Hyper Text Markup Language\n");
}

#[test]
fn test_format_simple_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "HTML\n*[CSS]: Cascading\n\n\n*[HTML]:Markup").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["format", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Formatted"));

    let content = fs::read_to_string(&test_file).unwrap();
    assert_eq!(content, "HTML\n*[CSS]: Cascading\n\n*[HTML]: Markup\n");
}

#[test]
fn test_format_check_formatted() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(
        &test_file,
        "I like HTML\n\n*[HTML]: Hyper Text Markup Language\n",
    )
    .unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["format", "--check", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("correctly formatted"));
}

#[test]
fn test_format_check_unformatted() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let original = "I like HTML\n\n*[HTML]:Hyper Text Markup Language\n";
    fs::write(&test_file, original).unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["format", "--check", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Diff in"))
        .stdout(predicate::str::contains("-*[HTML]:Hyper"))
        .stdout(predicate::str::contains("+*[HTML]: Hyper"));

    // --check never writes
    assert_eq!(fs::read_to_string(&test_file).unwrap(), original);
}

#[test]
fn test_format_with_preserve_separator_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join(".mdabbr.toml");
    let original = "I like HTML\n\n*[HTML]:Hyper Text Markup Language\n";
    fs::write(&test_file, original).unwrap();
    fs::write(&config_file, "[abbreviations]\npreserve_separator = true\n").unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["format", "--check", test_file.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_format_keeps_references_as_written() {
    cargo_bin_cmd!("mdabbr")
        .arg("format")
        .write_stdin("HTML and HTML5\n\n*[HTML]: Hyper Text Markup Language\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hyper Text Markup Language").count(1));
}
