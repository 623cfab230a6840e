//! Minute-indexed reading series.
//!
//! A series holds one metric's values for one night. Minutes are 1-based and
//! contiguous, so the value at position `i` belongs to minute `i + 1`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, Result};

/// Immutable sequence of per-minute readings. Every value is finite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ReadingSeries {
    values: Vec<f64>,
}

impl ReadingSeries {
    /// Build a series from values in minute order (first value is minute 1).
    ///
    /// # Errors
    /// Returns `InvalidParameter` if a value is not finite.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values: Vec<f64> = values.into_iter().collect();
        if let Some((minute, value)) = (1u32..).zip(&values).find(|(_, v)| !v.is_finite()) {
            return Err(CoreError::invalid(
                "value",
                format!("minute {minute} has non-finite reading {value}"),
            ));
        }
        Ok(Self { values })
    }

    /// Build a series from an explicit minute -> value mapping.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if the minutes are not exactly `1..=len`
    /// or a value is not finite.
    pub fn from_minutes(readings: &BTreeMap<u32, f64>) -> Result<Self> {
        let mut values = Vec::with_capacity(readings.len());
        for (expected, (&minute, &value)) in (1u32..).zip(readings.iter()) {
            if minute != expected {
                return Err(CoreError::invalid(
                    "minute",
                    format!("expected minute {expected}, found {minute}"),
                ));
            }
            values.push(value);
        }
        Self::from_values(values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value recorded at `minute`, if present.
    pub fn get(&self, minute: u32) -> Option<f64> {
        let idx = usize::try_from(minute).ok()?.checked_sub(1)?;
        self.values.get(idx).copied()
    }

    /// Iterate `(minute, value)` pairs in ascending minute order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (1u32..).zip(self.values.iter().copied())
    }
}

impl From<Vec<u32>> for ReadingSeries {
    fn from(samples: Vec<u32>) -> Self {
        Self {
            values: samples.into_iter().map(f64::from).collect(),
        }
    }
}

impl TryFrom<Vec<f64>> for ReadingSeries {
    type Error = CoreError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_values(values)
    }
}

impl From<ReadingSeries> for Vec<f64> {
    fn from(series: ReadingSeries) -> Self {
        series.values
    }
}
