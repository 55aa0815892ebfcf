//! External configuration loader
//!
//! Reads `colormatch.toml` (or a path given on the command line). A missing
//! file means defaults; individual missing fields default per-field.

use std::path::Path;

use serde::Deserialize;

use crate::types::{DEFAULT_BRIGHTNESS, DEFAULT_LIVES, DEFAULT_PIXELS, MAX_PIXELS};

/// Errors produced by configuration loading and validation
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Runtime configuration for one device
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub game: RulesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    /// Strip length in pixels
    #[serde(default = "default_pixels")]
    pub pixels: usize,
    /// Output brightness, `0.0..=1.0`
    #[serde(default = "default_brightness")]
    pub brightness: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// Lives per game
    #[serde(default = "default_lives")]
    pub lives: u8,
    /// Fixed refill seed; omit for a clock-derived seed each run
    #[serde(default)]
    pub seed: Option<u32>,
}

fn default_pixels() -> usize {
    DEFAULT_PIXELS
}

fn default_brightness() -> f32 {
    DEFAULT_BRIGHTNESS
}

fn default_lives() -> u8 {
    DEFAULT_LIVES
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            pixels: default_pixels(),
            brightness: default_brightness(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            lives: default_lives(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let config: GameConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the device cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.device.pixels == 0 || self.device.pixels > MAX_PIXELS {
            return Err(ConfigError::Validation(format!(
                "device.pixels must be in 1..={MAX_PIXELS}, got {}",
                self.device.pixels
            )));
        }
        if !(0.0..=1.0).contains(&self.device.brightness) {
            return Err(ConfigError::Validation(format!(
                "device.brightness must be in 0.0..=1.0, got {}",
                self.device.brightness
            )));
        }
        if self.game.lives == 0 {
            return Err(ConfigError::Validation(
                "game.lives must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
