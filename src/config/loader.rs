use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable holding the catalog bearer token.
pub const CATALOG_KEY_ENV: &str = "TMDB_API_KEY";
/// Environment variable holding the trending store API key.
pub const TRENDING_KEY_ENV: &str = "APPWRITE_API_KEY";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/marquee/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        Self::app_dir().join("config.toml")
    }

    /// Log file that sits next to `config_path`.
    pub fn log_path_for(config_path: &Path) -> PathBuf {
        match config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join("marquee.log"),
            _ => PathBuf::from("marquee.log"),
        }
    }

    fn app_dir() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("marquee")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, starts from `Config::default()`.
    /// - If the file exists, parses it as TOML.
    /// - Environment secrets are applied on top, then the result is validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Self::parse(&content, path)?
        } else {
            Config::default()
        };

        config.apply_env(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parses TOML content. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Overrides secrets from the environment. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(CATALOG_KEY_ENV).filter(|k| !k.is_empty()) {
            self.catalog.api_key = Some(key);
        }
        if let Some(key) = lookup(TRENDING_KEY_ENV).filter(|k| !k.is_empty()) {
            self.trending.api_key = Some(key);
        }
    }

    /// Validates the configuration.
    ///
    /// A missing catalog key is not an error: requests go out
    /// unauthenticated and fail one by one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "catalog.base_url must not be empty".to_string(),
            });
        }
        if self.trending.limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "trending.limit must be at least 1".to_string(),
            });
        }
        if self.search.debounce_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "search.debounce_ms must be at least 1".to_string(),
            });
        }
        if self.search.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "search.tick_rate_ms must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
