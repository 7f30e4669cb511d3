//! Game configuration
//!
//! Field size and gameplay tuning. Defaults come from [`crate::consts`];
//! hosts may override them from JSON (a file on native, LocalStorage on web).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// Config source could not be read
    Io(std::io::Error),
    /// Config source was not valid JSON for this schema
    Parse(serde_json::Error),
    /// Config parsed but describes an unplayable field
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    /// Opponent travel per tick
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_size: f32,
    pub ball_speed: f32,
    pub deflection_factor: f32,

    // === Opponent ===
    pub opponent_dead_zone: f32,

    /// Serve RNG seed (None = pick one at startup)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            deflection_factor: DEFLECTION_FACTOR,

            opponent_dead_zone: OPPONENT_DEAD_ZONE,

            seed: None,
        }
    }
}

impl GameConfig {
    /// Check that the configuration describes a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("paddle_margin", self.paddle_margin),
            ("paddle_speed", self.paddle_speed),
            ("deflection_factor", self.deflection_factor),
            ("opponent_dead_zone", self.opponent_dead_zone),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::Invalid(format!(
                "paddle_height {} exceeds field_height {}",
                self.paddle_height, self.field_height
            )));
        }
        if self.ball_size >= self.field_height || self.ball_size >= self.field_width {
            return Err(ConfigError::Invalid(format!(
                "ball_size {} must be smaller than the field",
                self.ball_size
            )));
        }
        // Both paddles plus the ball must fit side by side
        let lanes = 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size;
        if lanes >= self.field_width {
            return Err(ConfigError::Invalid(format!(
                "field_width {} too narrow for paddles and ball",
                self.field_width
            )));
        }

        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "paddle_duel_config";

    /// Load config from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load config from LocalStorage (WASM only), falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json_str(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }
}
