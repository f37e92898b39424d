use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::AppConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    Validation { message: String },
}

impl AppConfig {
    /// Returns the default configuration file path,
    /// `<config dir>/brandmatch/config.toml`, falling back to the current
    /// directory when the platform config dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("brandmatch").join("config.toml")
    }

    /// Loads configuration from the default path.
    ///
    /// A missing file yields `AppConfig::default()`; anything else is
    /// read, parsed as TOML, and validated.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path, defaulting when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validates field ranges. Called after parsing and again after CLI
    /// overrides are applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner_brand_id.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "owner_brand_id must not be empty".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.match_rate) {
            return Err(ConfigError::Validation {
                message: format!("match_rate must be within [0, 1], got {}", self.match_rate),
            });
        }

        if self.banner_seconds == 0 {
            return Err(ConfigError::Validation {
                message: "banner_seconds must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        AppConfig::default().validate().unwrap();
    }

    #[test]
    fn match_rate_out_of_range_is_rejected() {
        let config = AppConfig {
            match_rate: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn zero_banner_seconds_is_rejected() {
        let config = AppConfig {
            banner_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_owner_is_rejected() {
        let config = AppConfig {
            owner_brand_id: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
