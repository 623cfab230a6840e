//! Normal-distribution parameters derived from readings.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::series::ReadingSeries;

/// Mean and population standard deviation of a metric, as fed to the
/// synthetic series generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricParams {
    pub mean: f64,
    pub std_dev: f64,
}

impl MetricParams {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Derive parameters from a series, rounded to two decimal places.
    ///
    /// # Errors
    /// Returns `EmptyInput` if the series has no readings.
    pub fn from_series(series: &ReadingSeries) -> Result<Self> {
        if series.is_empty() {
            return Err(CoreError::empty("reading series with no minutes"));
        }
        let n = series.len() as f64;
        let mean = series.values().iter().sum::<f64>() / n;
        let variance = series
            .values()
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;
        Ok(Self {
            mean: round2(mean),
            std_dev: round2(variance.sqrt()),
        })
    }
}

/// Round to two decimal places, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
