//! Command-line surface of the binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_lists_options() {
    Command::cargo_bin("autosuggest")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--source"))
        .stdout(predicate::str::contains("--words"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_version() {
    Command::cargo_bin("autosuggest")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_source_is_rejected() {
    Command::cargo_bin("autosuggest")
        .unwrap()
        .args(["--source", "carrier-pigeon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("carrier-pigeon"));
}

#[test]
fn test_malformed_config_fails_before_terminal_setup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[search]\ndebounce_ms = \"soon\"\n").unwrap();

    Command::cargo_bin("autosuggest")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn test_missing_word_list_fails_before_terminal_setup() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("autosuggest")
        .unwrap()
        .args(["--source", "words", "--config"])
        .arg(dir.path().join("absent.toml"))
        .arg("--words")
        .arg(dir.path().join("no-such-words"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Word list error"));
}
