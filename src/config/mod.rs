//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::datasource::MatchSource;
use crate::models::Roster;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Match data source configuration.
///
/// Exactly one of `path` or `url` may be set; with neither, the default
/// local file is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Local JSON file with the match list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// HTTP URL serving the match list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./matches.json")
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The known team names; teams outside this list never enter the table
    #[serde(default = "default_roster")]
    pub roster: Vec<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_roster() -> Vec<String> {
    [
        "Ilavatta Pasanga",
        "Saravedi",
        "Legends",
        "Silent Kings",
        "Alapparai",
        "Baasha",
        "Prince Warriors",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            log_level: default_log_level(),
            source: SourceConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the given file, or fall back to defaults when it does not
    /// exist.
    pub fn load_or_default(path: &PathBuf) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster.is_empty() {
            return Err(ConfigError::ValidationError(
                "Roster must list at least one team".to_string(),
            ));
        }

        if self.source.path.is_some() && self.source.url.is_some() {
            return Err(ConfigError::ValidationError(
                "Set either source.path or source.url, not both".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// The roster as a model type.
    pub fn roster(&self) -> Roster {
        Roster::new(self.roster.clone())
    }

    /// Resolve the configured match source.
    pub fn match_source(&self) -> Result<MatchSource, ConfigError> {
        if let Some(url) = &self.source.url {
            let url = url::Url::parse(url).map_err(|e| {
                ConfigError::ValidationError(format!("Invalid source.url: {}", e))
            })?;
            return Ok(MatchSource::Url(url));
        }

        let path = self.source.path.clone().unwrap_or_else(default_data_path);
        Ok(MatchSource::File(path))
    }
}
