//! Binary-level CLI tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("phraseclip")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn test_run_requires_directories() {
    Command::cargo_bin("phraseclip")
        .unwrap()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input-dir"));
}

#[test]
fn test_run_rejects_missing_input_dir() {
    let output_dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("phraseclip")
        .unwrap()
        .args(["run", "--input-dir", "/no/such/directory", "--output-dir"])
        .arg(output_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input path not found"));
}

#[test]
fn test_scan_rejects_file_as_input_dir() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("video.mp4");
    std::fs::write(&file, b"").unwrap();

    Command::cargo_bin("phraseclip")
        .unwrap()
        .arg("scan")
        .arg("--input-dir")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_run_rejects_unreadable_config() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("phraseclip")
        .unwrap()
        .arg("run")
        .args(["--config", "/no/such/config.toml"])
        .arg("--input-dir")
        .arg(dir.path())
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
