use std::io::Write;

use lyrical::config::Config;
use lyrical::constants::{DEFAULT_DATABASE_NAME, DEFAULT_MONGODB_URI};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.database.uri, DEFAULT_MONGODB_URI);
    assert_eq!(config.database.name, "lyrical_graphql");
    assert_eq!(config.database.timeout_secs, 10);
    assert_eq!(config.database.timeout(), std::time::Duration::from_secs(10));
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Zero timeout should fail
    config.database.timeout_secs = 0;
    assert!(config.validate().is_err());

    // Reset and test an oversized timeout
    config.database.timeout_secs = 301;
    assert!(config.validate().is_err());

    // Reset and test a non-mongodb scheme
    config.database.timeout_secs = 10;
    config.database.uri = "postgres://localhost".to_string();
    assert!(config.validate().is_err());

    config.database.uri = "mongodb+srv://cluster0.example.net".to_string();
    assert!(config.validate().is_ok());

    config.database.name = " ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("name = \"lyrical_graphql\""));
    assert!(toml_str.contains("timeout_secs = 10"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[database]
uri = "mongodb://db.internal:27017"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.database.uri, "mongodb://db.internal:27017");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.database.name, DEFAULT_DATABASE_NAME);
    assert_eq!(config.database.timeout_secs, 10);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.database.uri, default_config.database.uri);
    assert_eq!(config.database.name, default_config.database.name);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[database]\nname = \"lyrics_test\"\ntimeout_secs = 3").unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.database.name, "lyrics_test");
    assert_eq!(config.database.timeout_secs, 3);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[database]\ntimeout_secs = 0").unwrap();
    assert!(Config::load_from_file(file.path()).is_err());

    let mut broken = tempfile::NamedTempFile::new().unwrap();
    writeln!(broken, "[database\nname = ").unwrap();
    assert!(Config::load_from_file(broken.path()).is_err());
}

#[test]
fn test_generate_default_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Lyrical Configuration File"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.database.uri, DEFAULT_MONGODB_URI);
}

#[test]
fn test_ensure_config_file_writes_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lyrical").join("config.toml");

    assert!(Config::ensure_config_file(&path).unwrap());
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.database.name, DEFAULT_DATABASE_NAME);

    // An existing file is left untouched
    std::fs::write(&path, "[database]\nname = \"mine\"\n").unwrap();
    assert!(!Config::ensure_config_file(&path).unwrap());
    assert_eq!(Config::load_from_file(&path).unwrap().database.name, "mine");
}
