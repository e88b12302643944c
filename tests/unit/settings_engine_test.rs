//! Integration-level unit tests for the SettingsEngine public API.
//!
//! Exercises default loading, dot-path updates persisted to disk, validation
//! of tracking values and reset behavior.

use std::fs;

use folio::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use folio::types::errors::SettingsError;
use folio::types::settings::FolioSettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for
/// the duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings, FolioSettings::default());
    assert_eq!(settings.tracking.lookahead_px, 100.0);
    assert_eq!(settings.window.title, "Portfolio");
}

#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();
    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("tracking.lookahead_px", serde_json::json!(64.0))
            .unwrap();
    }
    {
        let mut engine = engine_in_temp(&dir);
        let loaded = engine.load().unwrap();
        assert_eq!(loaded.tracking.lookahead_px, 64.0);
    }
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    assert!(matches!(
        engine.set_value("window.opacity", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_rejects_wrong_type_and_negative_lookahead() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    assert!(matches!(
        engine.set_value("tracking.lookahead_px", serde_json::json!("far")),
        Err(SettingsError::InvalidValue(_))
    ));
    assert!(matches!(
        engine.set_value("tracking.lookahead_px", serde_json::json!(-5.0)),
        Err(SettingsError::InvalidValue(_))
    ));
    assert_eq!(engine.get_settings().tracking.lookahead_px, 100.0);
}

#[test]
fn test_partial_config_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"tracking":{"lookahead_px":150}}"#,
    )
    .unwrap();
    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    assert_eq!(loaded.tracking.lookahead_px, 150.0);
    assert_eq!(loaded.window, FolioSettings::default().window);
}

#[test]
fn test_malformed_config_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
    let mut engine = engine_in_temp(&dir);
    assert!(matches!(engine.load(), Err(SettingsError::SerializationError(_))));
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("window.title", serde_json::json!("Chirag"))
        .unwrap();
    engine.reset().unwrap();
    assert_eq!(engine.get_settings(), &FolioSettings::default());

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), FolioSettings::default());
}
