//! TOML-based simulation configuration.
//!
//! Stores:
//! - Simulation size and sleep duration distribution
//! - Optional RNG seed for reproducible runs
//! - Fallback per-metric generator parameters, used when no historical
//!   readings file is supplied
//!
//! Configuration is read from `~/.config/sleepsim/config.toml` unless a path
//! is given explicitly. A missing default file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use sleepsim_core::builder::{DEFAULT_DURATION_MEAN, DEFAULT_DURATION_STD, DEFAULT_NIGHTS};
use sleepsim_core::{BaselineParams, MetricParams};

/// Simulation-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_nights")]
    pub nights: usize,
    #[serde(default = "default_duration_mean")]
    pub duration_mean: f64,
    #[serde(default = "default_duration_std")]
    pub duration_std: f64,
    /// Fixed seed; omitted means a fresh entropy-seeded run every time.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Nights presented after `simulate`.
    #[serde(default = "default_show_nights")]
    pub show_nights: usize,
}

/// Fallback generator parameters per metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineConfig {
    #[serde(default = "default_light")]
    pub light: MetricParams,
    #[serde(default = "default_sound")]
    pub sound: MetricParams,
    #[serde(default = "default_temperature")]
    pub temperature: MetricParams,
    #[serde(default = "default_movement")]
    pub movement: MetricParams,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub baseline: BaselineConfig,
}

// Default functions
fn default_nights() -> usize {
    DEFAULT_NIGHTS
}
fn default_duration_mean() -> f64 {
    DEFAULT_DURATION_MEAN
}
fn default_duration_std() -> f64 {
    DEFAULT_DURATION_STD
}
fn default_show_nights() -> usize {
    3
}
fn default_light() -> MetricParams {
    MetricParams::new(2.5, 1.8)
}
fn default_sound() -> MetricParams {
    MetricParams::new(32.0, 6.0)
}
fn default_temperature() -> MetricParams {
    MetricParams::new(19.5, 0.8)
}
fn default_movement() -> MetricParams {
    MetricParams::new(45.0, 30.0)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            nights: default_nights(),
            duration_mean: default_duration_mean(),
            duration_std: default_duration_std(),
            seed: None,
            show_nights: default_show_nights(),
        }
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            light: default_light(),
            sound: default_sound(),
            temperature: default_temperature(),
            movement: default_movement(),
        }
    }
}

impl From<&BaselineConfig> for BaselineParams {
    fn from(cfg: &BaselineConfig) -> Self {
        BaselineParams {
            light: cfg.light,
            sound: cfg.sound,
            temperature: cfg.temperature,
            movement: cfg.movement,
        }
    }
}

impl SimConfig {
    /// `~/.config/sleepsim/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("sleepsim")
            .join("config.toml")
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path cannot be read, or if any config
    /// file that exists cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
                Self::parse(&content)
            }
            None => {
                let path = Self::default_path();
                match std::fs::read_to_string(&path) {
                    Ok(content) => Self::parse(&content),
                    Err(_) => {
                        tracing::debug!(path = %path.display(), "no config file, using defaults");
                        Ok(Self::default())
                    }
                }
            }
        }
    }

    /// Parse TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML for this schema, or
    /// if `simulation.nights` is zero.
    pub fn parse(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let cfg: SimConfig = toml::from_str(content)?;
        if cfg.simulation.nights == 0 {
            return Err("invalid config: simulation.nights must be at least 1".into());
        }
        Ok(cfg)
    }

    /// Serialize to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized.
    pub fn to_toml(&self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(toml::to_string_pretty(self)?)
    }
}
