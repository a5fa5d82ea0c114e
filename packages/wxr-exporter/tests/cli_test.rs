//! Tests for the `wxr-export` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("site.yaml")
}

fn wxr_export() -> Command {
    Command::cargo_bin("wxr-export").unwrap()
}

#[test]
fn test_export_prints_document_without_output() {
    wxr_export()
        .arg("export")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
        ))
        .stdout(predicate::str::contains("<wxr:login>alice</wxr:login>"))
        .stderr(predicate::str::contains("Exporting"));
}

#[test]
fn test_export_to_stdout_sentinel() {
    let output = wxr_export()
        .args(["export", "-o", "-", "--indent", "0"])
        .arg(fixture())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let xml = String::from_utf8(output).unwrap();
    assert!(roxmltree::Document::parse(&xml).is_ok());
    assert!(xml.contains("wxr:version=\"1.3\"><channel><title>"));
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.xml");

    wxr_export()
        .arg("export")
        .arg(fixture())
        .arg("--output")
        .arg(&path)
        .args(["--indent", "2", "--spaces"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote"));

    let xml = fs::read_to_string(&path).unwrap();
    assert!(xml.contains("\n  <channel>"));
    assert!(roxmltree::Document::parse(&xml).is_ok());
}

#[test]
fn test_export_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("site.xml");

    wxr_export()
        .arg("export")
        .arg(fixture())
        .arg("-o")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open output target"));
}

#[test]
fn test_inspect_shows_counts() {
    wxr_export()
        .arg("inspect")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Example Blog"))
        .stdout(predicate::str::contains("Users: 1"))
        .stdout(predicate::str::contains("Terms: 2"))
        .stdout(predicate::str::contains("Comments: 1"));
}

#[test]
fn test_missing_snapshot_fails() {
    wxr_export()
        .args(["inspect", "does-not-exist.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}
