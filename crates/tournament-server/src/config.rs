//! Server configuration.
//!
//! Settings come from an optional TOML file, then command-line overrides.
//! A missing file yields the defaults.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Runtime settings for the catalog server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind: SocketAddr,
    /// SQLite database file.
    pub database_path: PathBuf,
    /// Directory receiving `tournaments.csv` and `tournaments.json`.
    pub output_dir: PathBuf,
    /// Populate an empty database with the sample catalog on startup.
    pub seed_sample_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
            database_path: PathBuf::from("data/tournaments.db"),
            output_dir: PathBuf::from("output"),
            seed_sample_data: true,
        }
    }
}

impl ServerConfig {
    /// Default configuration file, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "tournaments.toml";

    /// Loads configuration from `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind.port(), 5000);
        assert_eq!(config.database_path, PathBuf::from("data/tournaments.db"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_parse_full_config() {
        let config: ServerConfig = toml::from_str(
            r#"
bind = "127.0.0.1:8080"
database_path = "/var/lib/tournaments/catalog.db"
output_dir = "/srv/exports"
seed_sample_data = false
"#,
        )
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.database_path,
            PathBuf::from("/var/lib/tournaments/catalog.db")
        );
        assert_eq!(config.output_dir, PathBuf::from("/srv/exports"));
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ServerConfig = toml::from_str(r#"output_dir = "exports""#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("exports"));
        assert_eq!(config.bind.port(), 5000);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tournaments.toml");
        std::fs::write(&path, "bind = [not toml").unwrap();

        let result = ServerConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
