//! Integration tests for configuration persistence.

use arcana_tokens::storage::config::{load_config_from, save_config_to, AppConfig, ConfigError};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.default_preset = "glass".to_string();
    config.tokens.font_import = String::new();
    config.contrast.target_ratio = 7.0;
    save_config_to(&path, &config).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_preset = [").unwrap();
    assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
}
