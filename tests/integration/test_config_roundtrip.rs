//! Configuration persistence round-trips
//!
//! Saves and reloads configuration through real files in a temporary
//! directory, covering both TOML and JSON formats and the rule that
//! settings are saved back to the file they were loaded from.

use exprbox::config::{Config, ConfigLoader, LoadOptions, UiConfig};
use exprbox::i18n::Language;
use tempfile::TempDir;

fn sample_config() -> Config {
    Config {
        language: Language::En,
        ui: UiConfig {
            font_size: 16.0,
            window_width: 1280.0,
            window_height: 800.0,
            toast_duration_ms: 5000,
        },
    }
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let original = sample_config();
    let mut loader = ConfigLoader::new();
    loader.save_to_path(&original, &path).unwrap();

    let loaded = loader.load_from_path(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let original = sample_config();
    let mut loader = ConfigLoader::new();
    loader.save_to_path(&original, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.trim_start().starts_with('{'), "expected JSON output");

    let loaded = loader.load_from_path(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_settings_change_persists_to_the_loaded_file() {
    // Load from an explicit non-default path, change a setting, save
    // without naming a path, and the change must land in the same file.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("my.toml");

    let mut loader = ConfigLoader::new();
    loader.save_to_path(&sample_config(), &path).unwrap();

    let mut config = loader.load_from_path(&path).unwrap();
    assert_eq!(config.language, Language::En);

    config.language = Language::Zh;
    let saved_to = loader.save(&config).unwrap();
    assert_eq!(saved_to, path);

    let mut fresh = ConfigLoader::new();
    let reloaded = fresh.load_from_path(&path).unwrap();
    assert_eq!(reloaded.language, Language::Zh);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en\"\n").unwrap();

    let mut loader = ConfigLoader::new();
    let loaded = loader.load_from_path(&path).unwrap();
    assert_eq!(loaded.language, Language::En);
    assert_eq!(loaded.ui, UiConfig::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = [not toml").unwrap();

    let mut loader = ConfigLoader::new();
    assert!(loader.load_from_path(&path).is_err());
    assert_eq!(loader.current_path(), None);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut loader = ConfigLoader::new();
    assert!(loader.load_from_path(&dir.path().join("nope.toml")).is_err());
}

#[test]
fn test_env_var_overrides_search_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pointed.toml");

    let mut loader = ConfigLoader::new();
    loader.save_to_path(&sample_config(), &path).unwrap();

    std::env::set_var("EXPRBOX_CONFIG", &path);
    let mut search_loader = ConfigLoader::new();
    let loaded = search_loader.load_with_options(LoadOptions::default());
    std::env::remove_var("EXPRBOX_CONFIG");

    assert_eq!(loaded.unwrap(), sample_config());
    assert_eq!(search_loader.current_path(), Some(path.as_path()));
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = sample_config();
    config.ui.font_size = 2.0;
    assert!(config.validate().is_err());

    config = sample_config();
    config.ui.toast_duration_ms = 0;
    assert!(config.validate().is_err());

    assert!(sample_config().validate().is_ok());
}
