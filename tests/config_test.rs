//! Tests for match configuration loading.

use std::io::Write;
use strictly_minimax::{Mark, MatchConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = MatchConfig::default();
    assert_eq!(*config.computer_mark(), Mark::O);
    assert_eq!(config.human_mark(), Mark::X);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_load_full_config() {
    let file = write_config("computer_mark = \"X\"\nlog_filter = \"debug\"\n");
    let config = MatchConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.computer_mark(), Mark::X);
    assert_eq!(config.human_mark(), Mark::O);
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("");
    let config = MatchConfig::from_file(file.path()).expect("empty config is valid");
    assert_eq!(config, MatchConfig::default());
}

#[test]
fn test_invalid_mark_is_rejected() {
    let file = write_config("computer_mark = \"Z\"\n");
    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{}", err);
}

#[test]
fn test_missing_file_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"), "{}", err);
}
