use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/build2rise/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("build2rise").join("config.toml")
    }

    /// Default location of the persisted session file.
    pub fn default_session_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("build2rise").join("session.toml")
    }

    /// Session file to use: the configured one, or the platform default.
    pub fn session_path(&self) -> PathBuf {
        self.session
            .path
            .clone()
            .unwrap_or_else(Self::default_session_path)
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL parses and uses http or https
    /// - The upload ceiling and default match limit are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid api.base_url '{}': {}", self.api.base_url, e),
            }
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.base_url must use http or https, got '{}'",
                    url.scheme()
                ),
            });
        }

        if self.uploads.max_upload_bytes == 0 {
            return Err(ConfigError::ValidationError {
                message: "uploads.max_upload_bytes must be greater than zero".to_string(),
            });
        }

        if self.matches.default_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "matches.default_limit must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.uploads.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(config.matches.default_limit, 10);
        assert!(config.api.timeout_seconds.is_none());
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com/".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_upload_ceiling() {
        let mut config = Config::default();
        config.uploads.max_upload_bytes = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_upload_bytes"));
    }

    #[test]
    fn session_path_prefers_configured_value() {
        let mut config = Config::default();
        config.session.path = Some(PathBuf::from("/tmp/custom-session.toml"));
        assert_eq!(
            config.session_path(),
            PathBuf::from("/tmp/custom-session.toml")
        );
    }

    #[test]
    fn config_path_ends_with_expected() {
        assert!(Config::config_path().ends_with("build2rise/config.toml"));
    }
}
