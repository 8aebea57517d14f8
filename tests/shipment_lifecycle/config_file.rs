//! Executors built from configuration files.

use crate::common::*;
use shipledger::{ExecutorConfig, ResponseFormat, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn test_default_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    ExecutorConfig::write_default_if_missing(&path).unwrap();

    let config = ExecutorConfig::from_file(&path).unwrap();
    assert_eq!(config, ExecutorConfig::default());
}

#[test]
fn test_json_format_escapes_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "response_format = \"json\"\n").unwrap();

    let config = ExecutorConfig::from_file(&path).unwrap();
    assert_eq!(config.response_format, ResponseFormat::Json);

    let executor = executor_with(config);
    text(executor.invoke("set", widget("quote\"key")));
    let rendered = payload(executor.invoke("getAll", vec!["q".into(), "r".into()]));
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&rendered).unwrap();
    assert_eq!(entries[0]["Key"], "quote\"key");
}

#[test]
fn test_disabled_slot_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[last_key]\nenabled = false\n").unwrap();

    let executor = executor_with(ExecutorConfig::from_file(&path).unwrap());
    text(executor.invoke("set", widget("ship1")));
    assert!(get(&executor, "lastKey").is_empty());
}

#[test]
fn test_invalid_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "timestamp_style = \"unix\"\n").unwrap();
    assert!(ExecutorConfig::from_file(&path).is_err());
}
