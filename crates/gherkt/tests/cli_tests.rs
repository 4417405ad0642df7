//! CLI Interface E2E Tests
//!
//! These tests run the gherkt binary end to end, covering help and version
//! output, all three subcommands, and the error paths users hit most.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the gherkt binary
fn gherkt_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gherkt"))
}

/// Write a feature file into the temp directory
fn write_feature(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write feature file");
    path
}

/// Test 1: CLI Help Output
/// Verifies that the --help flag displays help information
#[test]
fn test_cli_help() {
    let mut cmd = Command::new(gherkt_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("highlight")));
}

/// Test 2: CLI Version Output
/// Verifies that the --version flag displays version information
#[test]
fn test_cli_version() {
    let mut cmd = Command::new(gherkt_bin());
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gherkt"));
}

/// Test 3: Languages Listing
/// Verifies that the languages command lists the registered dialects
#[test]
fn test_cli_languages() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let mut cmd = Command::new(gherkt_bin());
    cmd.current_dir(temp_dir.path()).arg("languages");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("English").and(predicate::str::contains("Deutsch")));
}

/// Test 4: Highlight Without Color
/// Verifies that --no-color output reproduces the input verbatim
#[test]
fn test_cli_highlight_no_color() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let content = "Feature: Basic\nGiven a cucumber\n";
    let file = write_feature(&temp_dir, "basic.feature", content);

    let mut cmd = Command::new(gherkt_bin());
    cmd.current_dir(temp_dir.path())
        .arg("--no-color")
        .arg("highlight")
        .arg(&file);

    cmd.assert().success().stdout(content);
}

/// Test 5: Highlight With Color
/// Verifies that default highlight output carries ANSI escape sequences
#[test]
fn test_cli_highlight_colors_keywords() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = write_feature(&temp_dir, "basic.feature", "Given a cucumber\n");

    let mut cmd = Command::new(gherkt_bin());
    cmd.current_dir(temp_dir.path()).arg("highlight").arg(&file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").and(predicate::str::contains("a cucumber")));
}

/// Test 6: Tokens Text Output
/// Verifies that the tokens command prints keyword records as text
#[test]
fn test_cli_tokens_text() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = write_feature(&temp_dir, "basic.feature", "Given a cucumber\n");

    let mut cmd = Command::new(gherkt_bin());
    cmd.current_dir(temp_dir.path()).arg("tokens").arg(&file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("keyword").and(predicate::str::contains("1:0-5")));
}

/// Test 7: Tokens JSON Output
/// Verifies that --format json emits parseable token records
#[test]
fn test_cli_tokens_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = write_feature(&temp_dir, "basic.feature", "Given a cucumber\n");

    let mut cmd = Command::new(gherkt_bin());
    cmd.current_dir(temp_dir.path())
        .arg("tokens")
        .arg(&file)
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"keyword\""));
}

/// Test 8: Unknown Language
/// Verifies that an unregistered culture tag fails with a clear message
#[test]
fn test_cli_unknown_language() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = write_feature(&temp_dir, "basic.feature", "Given a cucumber\n");

    let mut cmd = Command::new(gherkt_bin());
    cmd.current_dir(temp_dir.path())
        .arg("highlight")
        .arg(&file)
        .arg("--language")
        .arg("tlh");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no Gherkin dialect registered"));
}

/// Test 9: Unknown Output Format
/// Verifies that an unrecognized format name fails with a clear message
#[test]
fn test_cli_unknown_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = write_feature(&temp_dir, "basic.feature", "Given a cucumber\n");

    let mut cmd = Command::new(gherkt_bin());
    cmd.current_dir(temp_dir.path())
        .arg("tokens")
        .arg(&file)
        .arg("--format")
        .arg("yaml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}

/// Test 10: Missing Input File
/// Verifies that a nonexistent input path fails with a clear message
#[test]
fn test_cli_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let mut cmd = Command::new(gherkt_bin());
    cmd.current_dir(temp_dir.path())
        .arg("highlight")
        .arg("missing.feature");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

/// Test 11: German Dialect
/// Verifies that --language de scans a German feature file
#[test]
fn test_cli_german_dialect() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let content = "Szenariogrundriss: Gurken\nAngenommen es gibt Gurken\n";
    let file = write_feature(&temp_dir, "gurken.feature", content);

    let mut cmd = Command::new(gherkt_bin());
    cmd.current_dir(temp_dir.path())
        .arg("--no-color")
        .arg("highlight")
        .arg(&file)
        .arg("--language")
        .arg("de");

    cmd.assert().success().stdout(content);
}

/// Test 12: No Subcommand
/// Verifies that running gherkt without a subcommand prints usage
#[test]
fn test_cli_requires_subcommand() {
    let mut cmd = Command::new(gherkt_bin());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
