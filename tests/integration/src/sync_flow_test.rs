//! End-to-end sync flows over the public API
//!
//! These tests exercise the complete pipeline: listing command -> probe ->
//! engine -> rendered files, including the real process-backed lister.

use serde_json::{Value, json};
use tsref_core::{SyncEngine, SyncMode};
use tsref_test_utils::TestWorkspace;
use tsref_workspace::YarnLister;

const COMPOSITE: &str = r#"{"compilerOptions": {"composite": true}}"#;

fn two_package_workspace() -> TestWorkspace {
    TestWorkspace::new()
        .package("a", &[], Some(COMPOSITE))
        .package("b", &["a"], Some(COMPOSITE))
}

#[tokio::test]
async fn test_write_through_a_real_listing_process() {
    let ws = two_package_workspace();
    let lister = YarnLister::with_command(ws.listing_command());

    let report = SyncEngine::new(ws.root(), SyncMode::Write)
        .run(&lister)
        .await
        .unwrap();
    assert!(report.wrote_any());

    let b: Value = serde_json::from_str(&ws.read("packages/b/tsconfig.json")).unwrap();
    assert_eq!(b["references"], json!([{ "path": "../a" }]));

    let a: Value = serde_json::from_str(&ws.read("packages/a/tsconfig.json")).unwrap();
    assert_eq!(a["references"], json!([]));

    let root: Value = serde_json::from_str(&ws.read("tsconfig.json")).unwrap();
    assert_eq!(
        root["references"],
        json!([
            { "path": "packages/a/tsconfig.json" },
            { "path": "packages/b/tsconfig.json" }
        ])
    );
}

#[tokio::test]
async fn test_write_then_check_round_trip() {
    let ws = two_package_workspace();
    let lister = YarnLister::with_command(ws.listing_command());

    SyncEngine::new(ws.root(), SyncMode::Write)
        .run(&lister)
        .await
        .unwrap();

    let report = SyncEngine::new(ws.root(), SyncMode::Check)
        .run(&lister)
        .await
        .unwrap();
    assert!(report.is_clean());
}

#[tokio::test]
async fn test_second_write_changes_nothing() {
    let ws = two_package_workspace();

    SyncEngine::new(ws.root(), SyncMode::Write)
        .run(&ws.lister())
        .await
        .unwrap();
    let snapshot = (
        ws.read("packages/a/tsconfig.json"),
        ws.read("packages/b/tsconfig.json"),
        ws.read("tsconfig.json"),
    );

    let report = SyncEngine::new(ws.root(), SyncMode::Write)
        .run(&ws.lister())
        .await
        .unwrap();
    assert!(!report.wrote_any());
    assert_eq!(ws.read("packages/a/tsconfig.json"), snapshot.0);
    assert_eq!(ws.read("packages/b/tsconfig.json"), snapshot.1);
    assert_eq!(ws.read("tsconfig.json"), snapshot.2);
}

#[tokio::test]
async fn test_configless_package_is_invisible_to_references() {
    let ws = TestWorkspace::new()
        .package("a", &[], Some(COMPOSITE))
        .package("c", &[], None)
        .package("b", &["a", "c"], Some(COMPOSITE));

    let report = SyncEngine::new(ws.root(), SyncMode::Write)
        .run(&ws.lister())
        .await
        .unwrap();

    // c produces no outcome
    let labels: Vec<_> = report.packages.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b"]);

    // b never references c
    let b: Value = serde_json::from_str(&ws.read("packages/b/tsconfig.json")).unwrap();
    assert_eq!(b["references"], json!([{ "path": "../a" }]));

    // the root skips c as well
    let root: Value = serde_json::from_str(&ws.read("tsconfig.json")).unwrap();
    assert_eq!(
        root["references"],
        json!([
            { "path": "packages/a/tsconfig.json" },
            { "path": "packages/b/tsconfig.json" }
        ])
    );
}

#[tokio::test]
async fn test_check_on_drifted_workspace_leaves_disk_untouched() {
    let ws = two_package_workspace();
    let before_a = ws.read("packages/a/tsconfig.json");
    let before_b = ws.read("packages/b/tsconfig.json");

    let report = SyncEngine::new(ws.root(), SyncMode::Check)
        .run(&ws.lister())
        .await
        .unwrap();

    assert!(!report.is_clean());
    assert_eq!(ws.read("packages/a/tsconfig.json"), before_a);
    assert_eq!(ws.read("packages/b/tsconfig.json"), before_b);
    assert!(!ws.exists("tsconfig.json"));
}

#[tokio::test]
async fn test_workspace_style_file_shapes_the_output() {
    let ws = two_package_workspace();
    ws.write_file(".prettierrc", r#"{"useTabs": true}"#);

    SyncEngine::new(ws.root(), SyncMode::Write)
        .run(&ws.lister())
        .await
        .unwrap();

    let b = ws.read("packages/b/tsconfig.json");
    assert!(b.contains("\n\t\"compilerOptions\""));
    assert!(!b.contains("\n  \"compilerOptions\""));

    // the style applies to the root hub as well
    let root = ws.read("tsconfig.json");
    assert!(root.contains("\n\t\"files\""));
}

#[tokio::test]
async fn test_formatting_only_drift_is_still_drift() {
    let ws = TestWorkspace::new().package("a", &[], Some(COMPOSITE));

    SyncEngine::new(ws.root(), SyncMode::Write)
        .run(&ws.lister())
        .await
        .unwrap();

    // Semantically identical, formatted differently
    let canonical = ws.read("packages/a/tsconfig.json");
    ws.write_file(
        "packages/a/tsconfig.json",
        &canonical.replace("  ", "    "),
    );

    let report = SyncEngine::new(ws.root(), SyncMode::Check)
        .run(&ws.lister())
        .await
        .unwrap();
    assert!(!report.is_clean());
}
