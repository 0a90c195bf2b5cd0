//! Integration tests for the data manager

use std::fs;
use std::path::PathBuf;

use freq_charts_data::{aggregate, loader, DataManager};
use freq_charts_shared::{Error, ParsedDocument};
use serde_json::json;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn test_load_document() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "scores.json", r#"[{"score": 5}, {"score": 3}]"#);

    let document = loader::load_document(&path).await.unwrap();
    assert_eq!(document.name, "scores.json");
    assert_eq!(document.data, json!([{"score": 5}, {"score": 3}]));
}

#[tokio::test]
async fn test_load_document_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "broken.json", "{not json");

    let error = loader::load_document(&path).await.unwrap_err();
    assert!(matches!(error, Error::Parse { ref name, .. } if name == "broken.json"));
    assert!(error.is_fatal_to_batch());
}

#[tokio::test]
async fn test_load_document_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let error = loader::load_document(&path).await.unwrap_err();
    assert!(matches!(error, Error::FileRead { .. }));
}

#[tokio::test]
async fn test_batch_is_all_or_nothing() {
    let dir = TempDir::new().unwrap();
    let good_a = write_fixture(&dir, "a.json", r#"["x"]"#);
    let bad = write_fixture(&dir, "bad.json", "][");
    let good_b = write_fixture(&dir, "b.json", r#"["y"]"#);

    let result = loader::load_batch(&[good_a, bad, good_b]).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_manager_processes_accumulated_files() {
    let dir = TempDir::new().unwrap();
    let first = write_fixture(&dir, "first.json", r#"[{"score": 5}]"#);
    let second = write_fixture(&dir, "second.json", r#"[{"score": 3}]"#);

    let mut manager = DataManager::new();
    manager.add_files([first]);
    manager.process_batch().await.unwrap();
    assert_eq!(manager.current().unwrap().table.get("score"), Some(5.0));

    // A new selection re-processes the full accumulated list.
    manager.add_files([second]);
    let handle = manager.process_batch().await.unwrap().unwrap();
    assert_eq!(handle.table.get("score"), Some(8.0));
    assert_eq!(handle.metadata.document_count, 2);
    assert_eq!(handle.metadata.label_count, 1);
    assert_eq!(handle.metadata.total, 8.0);
}

#[tokio::test]
async fn test_manager_empty_selection_is_a_no_op() {
    let mut manager = DataManager::new();
    let result = manager.process_batch().await.unwrap();
    assert!(result.is_none());
    assert!(manager.current().is_none());
}

#[tokio::test]
async fn test_manager_resets_on_batch_failure() {
    let dir = TempDir::new().unwrap();
    let good = write_fixture(&dir, "good.json", r#"["x"]"#);
    let bad = write_fixture(&dir, "bad.json", "nope{");

    let mut manager = DataManager::new();
    manager.add_files([good]);
    manager.process_batch().await.unwrap();
    assert!(manager.current().is_some());

    // One bad file fails the whole batch and abandons the prior result.
    manager.add_files([bad]);
    assert!(manager.process_batch().await.is_err());
    assert!(manager.current().is_none());
    assert!(manager.files().is_empty());
}

#[test]
fn test_additivity_over_disjoint_batches() {
    let batch_a = vec![
        ParsedDocument::new("a", json!(["x", "x"])),
        ParsedDocument::new("b", json!({"latency": 12})),
    ];
    let batch_b = vec![
        ParsedDocument::new("c", json!(["x", "y"])),
        ParsedDocument::new("d", json!({"latency": 8, "errors": 2})),
    ];

    let combined: Vec<_> = batch_a.iter().chain(batch_b.iter()).cloned().collect();
    let mut merged = aggregate(&batch_a);
    merged.merge(&aggregate(&batch_b));

    assert_eq!(aggregate(&combined), merged);
    assert_eq!(merged.get("x"), Some(3.0));
    assert_eq!(merged.get("latency"), Some(20.0));
}

#[test]
fn test_table_serialization() {
    let table: freq_charts_shared::FrequencyTable =
        [("score".to_string(), 8.0)].into_iter().collect();

    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(json, r#"{"score":8.0}"#);

    let back: freq_charts_shared::FrequencyTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}
