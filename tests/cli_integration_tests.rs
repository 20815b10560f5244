//! CLI integration tests
//!
//! Exercises the binary surface: help/version output and the fixed-path
//! failure mode when no workbook is present next to the executable.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("sheetsum").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workbook summarizer"))
        .stdout(predicate::str::contains("summary.json"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("sheetsum").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetsum"));
}

#[test]
fn test_cli_rejects_arguments() {
    let mut cmd = Command::cargo_bin("sheetsum").unwrap();
    cmd.arg("unexpected.xlsx").assert().failure();
}

#[test]
fn test_cli_missing_workbook_fails() {
    // The input path is fixed relative to the executable; the test build
    // directory carries no je_samples.xlsx, so the run must fail cleanly.
    let mut cmd = Command::cargo_bin("sheetsum").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
