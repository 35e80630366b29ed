//! Lint subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_lint_clean_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(
        &test_file,
        "I like HTML\n\n*[HTML]: Hyper Text Markup Language\n",
    )
    .unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_lint_reports_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(
        &test_file,
        "I like HTML\n\n*[HTML]: Hootin Tootin Magic Lingo\n\n*[HTML]: Hyper Text Markup Language\n",
    )
    .unwrap();

    cargo_bin_cmd!("mdabbr")
        .args(["lint", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate-abbreviations"))
        .stdout(predicate::str::contains("line 3"))
        .stdout(predicate::str::contains("Found 1 issue(s)"));
}

#[test]
fn test_lint_check_fails_on_unused() {
    cargo_bin_cmd!("mdabbr")
        .args(["lint", "--check"])
        .write_stdin("Nothing to see\n\n*[CSS]: Cascading Style Sheets\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("unused-abbreviations"))
        .stdout(predicate::str::contains("<stdin>:3:1"));
}

#[test]
fn test_lint_check_passes_clean_input() {
    cargo_bin_cmd!("mdabbr")
        .args(["lint", "--check"])
        .write_stdin("HTML\n\n*[HTML]: Hyper Text Markup Language\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
