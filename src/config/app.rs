//! Main application configuration
//!
//! This module defines the top-level configuration for the rating ledger,
//! including environment variable loading, TOML files and validation.

use crate::config::{RatingConfig, SessionConfig};
use crate::error::LedgerError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Build a `LedgerError::ConfigurationError` wrapped for `anyhow` propagation
macro_rules! config_error {
    ($($arg:tt)*) => {
        anyhow::Error::from(LedgerError::ConfigurationError {
            message: format!($($arg)*),
        })
    };
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub session: SessionConfig,
    pub rating: RatingConfig,
}

/// Process-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "rating-ledger".to_string(),
            // Logs go to stderr; keep them quiet unless asked for
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Session settings
        if let Ok(games) = env::var("GAMES_PER_PLAYER") {
            self.session.games_per_player = games
                .parse()
                .map_err(|_| config_error!("Invalid GAMES_PER_PLAYER value: {}", games))?;
        }
        if let Ok(seed) = env::var("RNG_SEED") {
            self.session.seed = Some(
                seed.parse()
                    .map_err(|_| config_error!("Invalid RNG_SEED value: {}", seed))?,
            );
        }
        if let Ok(emit_json) = env::var("EMIT_JSON") {
            self.session.emit_json = emit_json
                .parse()
                .map_err(|_| config_error!("Invalid EMIT_JSON value: {}", emit_json))?;
        }

        // Rating settings
        if let Ok(k_factor) = env::var("K_FACTOR") {
            self.rating.k_factor = k_factor
                .parse()
                .map_err(|_| config_error!("Invalid K_FACTOR value: {}", k_factor))?;
        }
        if let Ok(threshold) = env::var("WIN_STREAK_THRESHOLD") {
            self.rating.win_streak_threshold = threshold
                .parse()
                .map_err(|_| config_error!("Invalid WIN_STREAK_THRESHOLD value: {}", threshold))?;
        }
        if let Ok(bonus) = env::var("WIN_STREAK_BONUS") {
            self.rating.win_streak_bonus = bonus
                .parse()
                .map_err(|_| config_error!("Invalid WIN_STREAK_BONUS value: {}", bonus))?;
        }
        if let Ok(min) = env::var("OPPONENT_RATING_MIN") {
            self.rating.opponent_rating_min = min
                .parse()
                .map_err(|_| config_error!("Invalid OPPONENT_RATING_MIN value: {}", min))?;
        }
        if let Ok(max) = env::var("OPPONENT_RATING_MAX") {
            self.rating.opponent_rating_max = max
                .parse()
                .map_err(|_| config_error!("Invalid OPPONENT_RATING_MAX value: {}", max))?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
        _ => return Err(config_error!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate rating settings
    if !config.rating.k_factor.is_finite() || config.rating.k_factor <= 0.0 {
        return Err(config_error!("K-factor must be a positive number"));
    }
    if config.rating.win_streak_threshold == 0 {
        return Err(config_error!("Win streak threshold must be greater than 0"));
    }
    if config.rating.opponent_rating_min >= config.rating.opponent_rating_max {
        return Err(config_error!(
            "Opponent rating range is empty: {}..{}",
            config.rating.opponent_rating_min,
            config.rating.opponent_rating_max
        ));
    }

    Ok(())
}
