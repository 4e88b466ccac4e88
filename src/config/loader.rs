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
    /// Uses `~/.config/arsim/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("arsim").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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
    /// - tick rate is non-zero
    /// - preview share is within 20..=80 percent
    /// - image quality is in (0, 1] and scale is positive
    /// - the margin leaves room on the page
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than 0".to_string(),
            });
        }

        if !(20..=80).contains(&self.ui.preview_percent) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.preview_percent must be between 20 and 80, got {}",
                    self.ui.preview_percent
                ),
            });
        }

        let export = &self.export;
        if !(export.image_quality > 0.0 && export.image_quality <= 1.0) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "export.image_quality must be in (0, 1], got {}",
                    export.image_quality
                ),
            });
        }

        if !(export.scale > 0.0) {
            return Err(ConfigError::ValidationError {
                message: format!("export.scale must be positive, got {}", export.scale),
            });
        }

        let (width, height) = export.page_size_mm();
        let shorter_side = width.min(height);
        if !(export.margin_mm >= 0.0 && export.margin_mm * 2.0 < shorter_side) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "export.margin_mm must be at least 0 and below {} for this page",
                    shorter_side / 2.0
                ),
            });
        }

        Ok(())
    }
}
