//! Descriptive statistics for a single reading series.
//!
//! Computes central tendency and dispersion measures and flags a series as
//! out of range when its peak exceeds the upper quartile:
//! - **Mean / median**: central tendency
//! - **Standard deviation**: population form (denominator N)
//! - **Quartiles / IQR**: linear interpolation between order statistics
//! - **Peak**: maximum value and the first minute it occurs at

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::series::ReadingSeries;

/// Summary of one reading series. Derived on demand, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of readings
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// 25th percentile
    pub q1: f64,
    /// 75th percentile
    pub q3: f64,
    /// Interquartile range (q3 - q1)
    pub iqr: f64,
    pub min: f64,
    pub max: f64,
    /// Minute at which `max` first occurs
    pub max_minute: u32,
    /// True when `max > q3`. Only high readings are flagged.
    pub is_out_of_range: bool,
}

/// Percentile `p` (0-100) of already sorted values.
///
/// Uses linear interpolation between the two closest ranks, where the rank of
/// `p` is `p / 100 * (n - 1)`. Returns `None` for empty input.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = (p / 100.0).clamp(0.0, 1.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    let value = sorted[lo] + (sorted[hi] - sorted[lo]) * frac;
    // Keep rounding error from escaping the bracketing order statistics.
    Some(value.max(sorted[lo]).min(sorted[hi]))
}

/// Summarize a reading series.
///
/// # Errors
/// Returns `EmptyInput` if the series has no readings.
pub fn summarize(series: &ReadingSeries) -> Result<SummaryStatistics> {
    if series.is_empty() {
        return Err(CoreError::empty("reading series with no minutes"));
    }

    let count = series.len();
    let n = count as f64;
    let mean = series.values().iter().sum::<f64>() / n;
    let variance = series
        .values()
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / n;

    let (max_minute, max) = series
        .iter()
        .fold((1, f64::NEG_INFINITY), |best, (minute, value)| {
            if value > best.1 {
                (minute, value)
            } else {
                best
            }
        });

    let mut sorted = series.values().to_vec();
    sorted.sort_by(f64::total_cmp);
    let min = sorted[0];

    // Non-empty input was checked above, so every percentile exists.
    let median = percentile(&sorted, 50.0).unwrap_or(min);
    let q1 = percentile(&sorted, 25.0).unwrap_or(min);
    let q3 = percentile(&sorted, 75.0).unwrap_or(max);

    Ok(SummaryStatistics {
        count,
        mean,
        median,
        std_dev: variance.sqrt(),
        q1,
        q3,
        iqr: q3 - q1,
        min,
        max,
        max_minute,
        is_out_of_range: max > q3,
    })
}
