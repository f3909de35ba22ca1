//! CLI-level tests that run without real PDF fixtures.

use assert_cmd::Command;
use predicates::prelude::*;

fn poex() -> Command {
    Command::cargo_bin("poex").unwrap()
}

#[test]
fn help_lists_subcommands() {
    poex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn extract_missing_input_fails_with_path() {
    poex()
        .args(["extract", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.pdf"));
}

#[test]
fn extract_rejects_non_pdf_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bogus.pdf");
    std::fs::write(&path, b"definitely not a pdf").unwrap();

    poex()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("PDF"));
}

#[test]
fn batch_with_no_matches_fails() {
    poex()
        .args(["batch", "no-such-dir/*.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching PDF files"));
}

#[test]
fn batch_skips_unreadable_file_and_still_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.pdf");
    std::fs::write(&bad, b"garbage").unwrap();
    let out = dir.path().join("merged.csv");

    poex()
        .arg("batch")
        .arg(dir.path().join("*.pdf"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed files:"))
        .stdout(predicate::str::contains("bad.pdf"));

    assert!(out.exists());
}

#[test]
fn config_show_prints_defaults() {
    poex()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("short_row_policy"));
}

#[test]
fn config_path_prints_a_path() {
    poex()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}
