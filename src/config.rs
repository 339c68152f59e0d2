//! Configuration management for Lyrical
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_APP_NAME, DEFAULT_DATABASE_NAME,
    DEFAULT_MONGODB_URI, DEFAULT_OPERATION_TIMEOUT_SECS, MAX_OPERATION_TIMEOUT_SECS, MONGODB_URI_ENV,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// MongoDB connection string (overridden by the MONGOURI environment variable)
    pub uri: String,
    /// Database holding the song and lyric collections
    pub name: String,
    /// Per-operation timeout in seconds
    pub timeout_secs: u64,
    /// Application name reported to the server
    pub app_name: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file in the data directory
    pub enabled: bool,
    /// Level filter: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
            name: DEFAULT_DATABASE_NAME.to_string(),
            timeout_secs: DEFAULT_OPERATION_TIMEOUT_SECS,
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Per-operation timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or defaults, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the connection URI with `MONGOURI` when it is set and non-empty
    pub fn apply_env_overrides(&mut self) {
        if let Ok(uri) = std::env::var(MONGODB_URI_ENV) {
            self.apply_uri_override(&uri);
        }
    }

    fn apply_uri_override(&mut self, uri: &str) {
        let uri = uri.trim();
        if !uri.is_empty() {
            log::debug!("Using connection URI from {}", MONGODB_URI_ENV);
            self.database.uri = uri.to_string();
        }
    }

    /// Find configuration file in order of precedence
    pub fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Write the default configuration to `path` unless a file is already there.
    ///
    /// Returns whether a file was written.
    pub fn ensure_config_file<P: AsRef<Path>>(path: P) -> Result<bool> {
        if path.as_ref().exists() {
            return Ok(false);
        }
        Self::generate_default_config(path)?;
        Ok(true)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let db = &self.database;

        if db.uri.trim().is_empty() {
            anyhow::bail!("database.uri cannot be empty");
        }
        if !(db.uri.starts_with("mongodb://") || db.uri.starts_with("mongodb+srv://")) {
            anyhow::bail!("database.uri must start with mongodb:// or mongodb+srv://, got '{}'", db.uri);
        }
        if db.name.trim().is_empty() {
            anyhow::bail!("database.name cannot be empty");
        }
        if db.timeout_secs == 0 || db.timeout_secs > MAX_OPERATION_TIMEOUT_SECS {
            anyhow::bail!(
                "database.timeout_secs must be between 1 and {}, got {}",
                MAX_OPERATION_TIMEOUT_SECS,
                db.timeout_secs
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Lyrical Configuration File\n# Generated on {}\n# {} overrides database.uri when set\n\n",
            chrono::Local::now().format("%Y-%m-%d"),
            MONGODB_URI_ENV
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_under_config_dir() {
        if let Ok(path) = Config::get_default_config_path() {
            assert!(path.ends_with("lyrical/config.toml"));
            assert_eq!(path.parent().unwrap(), Config::get_xdg_config_dir().unwrap());
        }
    }

    #[test]
    fn test_uri_override_ignores_blank() {
        let mut config = Config::default();
        config.apply_uri_override("   ");
        assert_eq!(config.database.uri, DEFAULT_MONGODB_URI);

        config.apply_uri_override("mongodb://db.internal:27017");
        assert_eq!(config.database.uri, "mongodb://db.internal:27017");
    }
}
