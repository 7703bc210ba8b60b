//! Integration tests for the commit-corpus CLI
//!
//! These tests run the binary end to end: inspect a diff, analyze a
//! message, validate a dataset and prepare training data from a real
//! repository.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use common::fixtures::{MIXED_DIFF, numbered_lines};

/// Helper function to create a commit-corpus command with an isolated config dir
fn corpus_cmd(config_home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("commit-corpus"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// BASIC COMMANDS
// =============================================================================

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    corpus_cmd(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("commit-corpus v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_version_json() {
    let home = TempDir::new().unwrap();
    let output = corpus_cmd(&home).args(["--json", "version"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_no_command_prints_hint() {
    let home = TempDir::new().unwrap();
    corpus_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}

// =============================================================================
// DIFF COMMANDS
// =============================================================================

#[test]
fn test_stats_from_stdin() {
    let home = TempDir::new().unwrap();
    corpus_cmd(&home)
        .arg("stats")
        .write_stdin(MIXED_DIFF)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files changed:  2"))
        .stdout(predicate::str::contains("Lines changed:  3"))
        .stdout(predicate::str::contains("png, rs"));
}

#[test]
fn test_stats_json_from_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("change.diff");
    fs::write(&path, MIXED_DIFF).unwrap();

    let output = corpus_cmd(&home).arg("--json").arg("stats").arg(&path).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["stats"]["insertions"], 2);
    assert_eq!(json["stats"]["deletions"], 1);
    assert_eq!(json["stats"]["binary_files"], 1);
    assert_eq!(json["meaningful"], true);
}

#[test]
fn test_stats_missing_file() {
    let home = TempDir::new().unwrap();
    corpus_cmd(&home)
        .args(["stats", "does-not-exist.diff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_clean_diff_truncates() {
    let home = TempDir::new().unwrap();
    let output = corpus_cmd(&home)
        .args(["--json", "clean-diff", "--max-lines", "10"])
        .write_stdin(numbered_lines(30))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["max_lines"], 10);
    let diff = json["diff"].as_str().unwrap();
    assert_eq!(diff.lines().count(), 11);
    assert!(diff.contains("... (diff truncated due to length) ..."));
}

#[test]
fn test_clean_diff_drops_binary() {
    let home = TempDir::new().unwrap();
    corpus_cmd(&home)
        .arg("clean-diff")
        .write_stdin(MIXED_DIFF)
        .assert()
        .success()
        .stdout(predicate::str::contains("+pub mod new;"))
        .stdout(predicate::str::contains("Binary files").not());
}

// =============================================================================
// MESSAGE COMMAND
// =============================================================================

#[test]
fn test_message_human() {
    let home = TempDir::new().unwrap();
    corpus_cmd(&home)
        .args(["message", "fix:   handle empty input!!"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Handle empty input.\n"))
        .stdout(predicate::str::contains("Category: other"))
        .stdout(predicate::str::contains("not imperative"));
}

#[test]
fn test_message_json() {
    let home = TempDir::new().unwrap();
    let output = corpus_cmd(&home)
        .args(["--json", "message", "feat: add retry logic"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["original"], "feat: add retry logic");
    assert_eq!(json["normalized"], "Add retry logic");
    assert_eq!(json["category"], "feature");
    assert_eq!(json["quality"]["has_imperative"], true);
    assert_eq!(json["quality"]["quality_score"], 10);
}

// =============================================================================
// VALIDATE / DIVERSITY
// =============================================================================

fn write_dataset(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("data.jsonl");
    let lines = [
        serde_json::json!({"diff": "diff --git a/a.rs b/a.rs\n+fn a() {}", "commit_message": "Add function a"}),
        serde_json::json!({"patch": "", "message": "Fix."}),
        serde_json::json!({"diff": "+x", "commit_message": ""}),
        serde_json::json!({"diff": "-y", "commit_message": "Remove y"}),
    ];
    let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_validate_human() {
    let home = TempDir::new().unwrap();
    let dataset = write_dataset(&home);
    corpus_cmd(&home)
        .arg("validate")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("Validated 4 sample(s)"))
        .stdout(predicate::str::contains("Valid:   2 (50.0%)"))
        .stdout(predicate::str::contains("empty_diff"));
}

#[test]
fn test_validate_json_with_jobs() {
    let home = TempDir::new().unwrap();
    let dataset = write_dataset(&home);

    let sequential = corpus_cmd(&home).arg("--json").arg("validate").arg(&dataset).output().unwrap();
    let sharded = corpus_cmd(&home)
        .arg("--json")
        .arg("validate")
        .arg(&dataset)
        .args(["--jobs", "3"])
        .output()
        .unwrap();
    assert!(sequential.status.success());
    assert!(sharded.status.success());
    assert_eq!(sequential.stdout, sharded.stdout);

    let json: serde_json::Value = serde_json::from_slice(&sharded.stdout).unwrap();
    assert_eq!(json["total_samples"], 4);
    assert_eq!(json["invalid_samples"], 2);
    assert_eq!(json["common_issues"][0]["issue"], "empty_diff");
}

#[test]
fn test_validate_bad_json_line() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.jsonl");
    fs::write(&path, "{\"diff\": \"+a\"}\nnot json\n").unwrap();

    corpus_cmd(&home)
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_diversity() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("predictions.txt");
    fs::write(&path, "Fix bug\n\nfix bug\nAdd test\n").unwrap();

    let output = corpus_cmd(&home).arg("--json").arg("diversity").arg(&path).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["predictions"], 3);
    assert_eq!(json["report"]["unique_unigrams"], 4);
    assert_eq!(json["report"]["unique_bigrams"], 2);
}
