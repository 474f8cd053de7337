//! Binary-level tests for the tsref CLI
//!
//! Each test drives the compiled binary in a fixture workspace, replaying
//! the workspace listing through `--list-command`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use tsref_test_utils::TestWorkspace;

const COMPOSITE: &str = r#"{"compilerOptions": {"composite": true}}"#;

fn tsref() -> Command {
    Command::cargo_bin("tsref").unwrap()
}

fn drifted_workspace() -> (TestWorkspace, String) {
    let ws = TestWorkspace::new()
        .package("a", &[], Some(COMPOSITE))
        .package("b", &["a"], Some(COMPOSITE));
    let listing = ws.listing_command();
    (ws, listing)
}

#[test]
fn test_check_exits_one_on_drift_and_hints_at_write() {
    let (ws, listing) = drifted_workspace();
    let before = ws.read("packages/b/tsconfig.json");

    tsref()
        .current_dir(ws.path())
        .args(["check", "--list-command", &listing])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("DRIFTED"))
        .stderr(predicate::str::contains("tsref write"));

    assert_eq!(ws.read("packages/b/tsconfig.json"), before);
}

#[test]
fn test_write_syncs_and_reports_it() {
    let (ws, listing) = drifted_workspace();

    tsref()
        .current_dir(ws.path())
        .args(["write", "--list-command", &listing])
        .assert()
        .success()
        .stdout(predicate::str::contains("were synced"));

    assert!(ws.read("packages/b/tsconfig.json").contains("../a"));
    assert!(ws.exists("tsconfig.json"));
}

#[test]
fn test_second_write_is_already_in_sync() {
    let (ws, listing) = drifted_workspace();

    tsref()
        .current_dir(ws.path())
        .args(["write", "--list-command", &listing])
        .assert()
        .success();

    tsref()
        .current_dir(ws.path())
        .args(["write", "--list-command", &listing])
        .assert()
        .success()
        .stdout(predicate::str::contains("already in sync"));
}

#[test]
fn test_check_passes_after_write() {
    let (ws, listing) = drifted_workspace();

    tsref()
        .current_dir(ws.path())
        .args(["write", "--list-command", &listing])
        .assert()
        .success();

    tsref()
        .current_dir(ws.path())
        .args(["check", "--list-command", &listing])
        .assert()
        .success()
        .stdout(predicate::str::contains("in sync"));
}

#[test]
fn test_missing_workspace_root_is_an_error() {
    let temp = TempDir::new().unwrap();

    tsref()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No workspace root"));
}

#[test]
fn test_failing_listing_command_is_an_error() {
    let (ws, _) = drifted_workspace();

    tsref()
        .current_dir(ws.path())
        .args(["check", "--list-command", "exit 7"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_completions_generate() {
    tsref()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tsref"));
}
