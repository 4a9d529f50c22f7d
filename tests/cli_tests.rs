//! End-to-end tests for the podup CLI
//!
//! These tests verify:
//! - Missing project files produce a descriptive failure
//! - Per-pod query failures degrade rows instead of failing the run
//! - JSON output schema and the --outdated filter
//!
//! No test depends on a `pod` binary or network access: registry-backed pods
//! degrade to `unknown`, and the only deterministic "up to date" fixture is a
//! git pod pinned to a commit, which resolves without any subprocess.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn podup() -> Command {
    Command::cargo_bin("podup").expect("binary should build")
}

/// Project with one registry pod (resolves to unknown without `pod`) and one
/// git pod pinned to a commit (deterministically up to date)
fn fixture_project() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");

    let podfile = r#"platform :ios, '14.0'

target 'App' do
  pod 'Alamofire', '~> 5.4.0'
  pod 'MyKit', :git => 'https://example.invalid/mykit.git', :commit => 'abc1234def'
end
"#;
    fs::write(dir.path().join("Podfile"), podfile).unwrap();

    let lockfile = r#"PODS:
  - Alamofire (5.4.0)
  - MyKit (1.0.0)

DEPENDENCIES:
  - Alamofire (~> 5.4.0)
  - MyKit (from `https://example.invalid/mykit.git`, commit `abc1234def`)

CHECKOUT OPTIONS:
  MyKit:
    :commit: abc1234def
    :git: https://example.invalid/mykit.git
"#;
    fs::write(dir.path().join("Podfile.lock"), lockfile).unwrap();

    dir
}

#[test]
fn test_missing_podfile_fails_with_path() {
    let dir = tempfile::tempdir().unwrap();

    podup()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Podfile not found"))
        .stderr(predicate::str::contains(dir.path().to_string_lossy().to_string()));
}

#[test]
fn test_missing_lockfile_fails_with_hint() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Podfile"), "pod 'Alamofire'\n").unwrap();

    podup()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Podfile.lock not found"))
        .stderr(predicate::str::contains("pod install"));
}

#[test]
fn test_query_failures_degrade_but_exit_zero() {
    let dir = fixture_project();

    let assert = podup()
        .arg(dir.path())
        .args(["--json", "--timeout", "5"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    let pods = doc["pods"].as_array().unwrap();
    assert_eq!(pods.len(), 2);

    // sorted by name: Alamofire first
    assert_eq!(pods[0]["name"], "Alamofire");
    assert_eq!(pods[0]["status"], "unknown");
    assert_eq!(pods[0]["locked"], "5.4.0");

    // pinned commit resolves locally
    assert_eq!(pods[1]["name"], "MyKit");
    assert_eq!(pods[1]["status"], "up_to_date");
    assert_eq!(pods[1]["would_update"], false);
    assert_eq!(pods[1]["locked"], "abc1234def");

    assert_eq!(doc["summary"]["total"], 2);
    assert_eq!(doc["summary"]["unknown"], 1);
    assert_eq!(doc["summary"]["up_to_date"], 1);
}

#[test]
fn test_outdated_filter_drops_settled_rows() {
    let dir = fixture_project();

    let assert = podup()
        .arg(dir.path())
        .args(["--json", "--outdated", "--timeout", "5"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    // unknown and up-to-date rows are both filtered out
    assert_eq!(doc["pods"].as_array().unwrap().len(), 0);
    assert_eq!(doc["summary"]["total"], 0);
}

#[test]
fn test_table_output_plain_glyphs() {
    let dir = fixture_project();

    podup()
        .arg(dir.path())
        .args(["--no-emoji", "--timeout", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"))
        .stdout(predicate::str::contains("STATUS"))
        .stdout(predicate::str::contains("Alamofire"))
        .stdout(predicate::str::contains("MyKit"))
        .stdout(predicate::str::contains("would update"))
        .stdout(predicate::str::contains("✅").not());
}

#[test]
fn test_version_flag() {
    podup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("podup"));
}
