//! Sensor metric kinds recorded during sleep.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One of the four environmental sensors sampled every minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Light intensity
    Light,
    /// Sound level
    Sound,
    /// Room temperature
    Temperature,
    /// Body movement (accelerometer)
    Movement,
}

impl MetricKind {
    /// All metrics in their canonical order.
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Light,
        MetricKind::Sound,
        MetricKind::Temperature,
        MetricKind::Movement,
    ];

    /// Display unit. Never used in computation.
    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::Light => "lux",
            MetricKind::Sound => "dB",
            MetricKind::Temperature => "°C",
            MetricKind::Movement => "mg",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MetricKind::Light => "light",
            MetricKind::Sound => "sound",
            MetricKind::Temperature => "temperature",
            MetricKind::Movement => "movement",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(MetricKind::Light),
            "sound" => Ok(MetricKind::Sound),
            "temperature" | "temp" => Ok(MetricKind::Temperature),
            "movement" => Ok(MetricKind::Movement),
            other => Err(CoreError::invalid(
                "metric",
                format!("unknown metric '{other}'"),
            )),
        }
    }
}
