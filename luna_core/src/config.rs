//! Configuration file support for Luna.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/luna/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tracking: TrackingConfig,

    #[serde(default)]
    pub prediction: PredictionConfig,
}

/// Cycle tracking parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Average cycle length assumed before any cycle has been recorded.
    #[serde(default = "default_initial_average_days")]
    pub initial_average_days: i64,

    /// How far a start-to-start gap may stray from the average before the
    /// pair is flagged as irregular.
    #[serde(default = "default_irregularity_threshold_days")]
    pub irregularity_threshold_days: i64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            initial_average_days: default_initial_average_days(),
            irregularity_threshold_days: default_irregularity_threshold_days(),
        }
    }
}

/// Period prediction parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Shortest cycle length a prediction may draw, in days.
    #[serde(default = "default_min_cycle_days")]
    pub min_cycle_days: i64,

    /// Longest cycle length a prediction may draw, in days.
    #[serde(default = "default_max_cycle_days")]
    pub max_cycle_days: i64,

    /// How many periods to predict ahead.
    #[serde(default = "default_periods_ahead")]
    pub periods_ahead: u32,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            min_cycle_days: default_min_cycle_days(),
            max_cycle_days: default_max_cycle_days(),
            periods_ahead: default_periods_ahead(),
        }
    }
}

// Default value functions
fn default_initial_average_days() -> i64 {
    28
}

fn default_irregularity_threshold_days() -> i64 {
    5
}

fn default_min_cycle_days() -> i64 {
    28
}

fn default_max_cycle_days() -> i64 {
    30
}

fn default_periods_ahead() -> u32 {
    2
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("luna").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check that the configured values make sense together.
    pub fn validate(&self) -> Result<()> {
        if self.tracking.initial_average_days <= 0 {
            return Err(Error::Config(
                "tracking.initial_average_days must be positive".into(),
            ));
        }
        if self.tracking.irregularity_threshold_days < 0 {
            return Err(Error::Config(
                "tracking.irregularity_threshold_days must not be negative".into(),
            ));
        }
        if self.prediction.min_cycle_days <= 0 {
            return Err(Error::Config(
                "prediction.min_cycle_days must be positive".into(),
            ));
        }
        if self.prediction.min_cycle_days > self.prediction.max_cycle_days {
            return Err(Error::Config(format!(
                "prediction.min_cycle_days ({}) exceeds max_cycle_days ({})",
                self.prediction.min_cycle_days, self.prediction.max_cycle_days
            )));
        }
        if self.prediction.periods_ahead == 0 {
            return Err(Error::Config(
                "prediction.periods_ahead must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
