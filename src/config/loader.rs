use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::card::flip::QUARTER_TURN_DEG;
use crate::card::Orientation;
use crate::config::types::Config;

/// Why `config.toml` could not be turned into a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid flashcard config: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `<config_dir>/flashcard/config.toml`, or `./flashcard/config.toml`
    /// when the platform has no config directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("flashcard").join("config.toml")
    }

    /// A missing file is not an error: every setting has a default.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
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

    /// Reject settings the flip cannot honour: a rotation step that would
    /// skip the quarter turn, a zero frame interval, negative depth steps,
    /// or a default face other than `up`/`down`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let animation = &self.animation;
        let degrees = animation.degrees_per_tick;
        if degrees == 0 || degrees > QUARTER_TURN_DEG || QUARTER_TURN_DEG % degrees != 0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "animation.degrees_per_tick must divide {QUARTER_TURN_DEG}, got {degrees}"
                ),
            });
        }

        if animation.frame_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "animation.frame_interval_ms must be greater than zero".to_string(),
            });
        }

        if animation.scale_per_tick < 0.0 || animation.translate_per_tick < 0.0 {
            return Err(ConfigError::ValidationError {
                message: "animation scale/translate steps must not be negative".to_string(),
            });
        }

        if let Err(reason) = self.card.face.parse::<Orientation>() {
            return Err(ConfigError::ValidationError {
                message: format!("card.face: {reason}"),
            });
        }

        Ok(())
    }
}
