use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::ui::page::REGIONS;

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
    /// Uses `~/.config/folio/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("folio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using built-in content");
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
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one typewriter phrase and one hero slide
    /// - Visibility threshold in (0, 1]
    /// - Non-zero counter steps and timer intervals
    /// - Every stat is owned by a page region
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typewriter.phrases.is_empty() {
            return Err(validation("At least one typewriter phrase must be configured"));
        }

        if self.slides.is_empty() {
            return Err(validation("At least one hero slide must be configured"));
        }

        let threshold = self.animation.visibility_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(validation(format!(
                "Visibility threshold {} must be in (0, 1]",
                threshold
            )));
        }

        if self.animation.counter_steps == 0 {
            return Err(validation("Counter steps must be greater than zero"));
        }

        let intervals = [
            ("typewriter.type_ms", self.typewriter.type_ms),
            ("typewriter.hold_ms", self.typewriter.hold_ms),
            ("typewriter.delete_ms", self.typewriter.delete_ms),
            ("animation.counter_tick_ms", self.animation.counter_tick_ms),
            ("animation.slide_interval_ms", self.animation.slide_interval_ms),
            ("animation.frame_ms", self.animation.frame_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, ms)| *ms == 0) {
            return Err(validation(format!("{} must be greater than zero", name)));
        }

        if self.feed.limit == 0 {
            return Err(validation("Feed limit must be greater than zero"));
        }

        if let Some(stat) = self
            .stats
            .iter()
            .find(|stat| !REGIONS.contains(&stat.region.as_str()))
        {
            return Err(validation(format!(
                "Stat '{}' is owned by unknown region '{}'",
                stat.id, stat.region
            )));
        }

        Ok(())
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
