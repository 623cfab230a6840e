//! Simulated nights and the ordered collection they live in.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::metric::MetricKind;
use crate::series::ReadingSeries;
use crate::stats::MetricParams;

/// Whole hours plus leftover minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl SleepDuration {
    pub fn from_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }
}

/// One simulated night of sleep.
///
/// Every series has exactly `minutes_slept` readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NightRecord {
    id: u32,
    minutes_slept: u32,
    light: ReadingSeries,
    sound: ReadingSeries,
    temperature: ReadingSeries,
    movement: ReadingSeries,
}

/// Mean and standard deviation of each metric for one night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightOverview {
    pub night_id: u32,
    pub duration: SleepDuration,
    pub light: MetricParams,
    pub sound: MetricParams,
    pub temperature: MetricParams,
    pub movement: MetricParams,
}

impl NightRecord {
    /// Assemble a night from its four series.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if any series length differs from
    /// `minutes_slept`.
    pub fn new(
        id: u32,
        minutes_slept: u32,
        light: ReadingSeries,
        sound: ReadingSeries,
        temperature: ReadingSeries,
        movement: ReadingSeries,
    ) -> Result<Self> {
        let expected = minutes_slept as usize;
        for (kind, series) in [
            (MetricKind::Light, &light),
            (MetricKind::Sound, &sound),
            (MetricKind::Temperature, &temperature),
            (MetricKind::Movement, &movement),
        ] {
            if series.len() != expected {
                return Err(CoreError::invalid(
                    kind.name(),
                    format!(
                        "night {id} has {} readings but {minutes_slept} minutes slept",
                        series.len()
                    ),
                ));
            }
        }

        Ok(Self {
            id,
            minutes_slept,
            light,
            sound,
            temperature,
            movement,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn minutes_slept(&self) -> u32 {
        self.minutes_slept
    }

    pub fn duration(&self) -> SleepDuration {
        SleepDuration::from_minutes(self.minutes_slept)
    }

    pub fn series(&self, kind: MetricKind) -> &ReadingSeries {
        match kind {
            MetricKind::Light => &self.light,
            MetricKind::Sound => &self.sound,
            MetricKind::Temperature => &self.temperature,
            MetricKind::Movement => &self.movement,
        }
    }

    /// Per-metric mean/std (2 d.p.) and duration for this night.
    ///
    /// # Errors
    /// Returns `EmptyInput` for a night with zero minutes slept.
    pub fn overview(&self) -> Result<NightOverview> {
        Ok(NightOverview {
            night_id: self.id,
            duration: self.duration(),
            light: MetricParams::from_series(&self.light)?,
            sound: MetricParams::from_series(&self.sound)?,
            temperature: MetricParams::from_series(&self.temperature)?,
            movement: MetricParams::from_series(&self.movement)?,
        })
    }
}

/// Nights ordered by identifier, starting at 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NightCollection {
    nights: Vec<NightRecord>,
}

impl NightCollection {
    /// Wrap nights that are already numbered `1..=n` in order.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if identifiers are not sequential from 1.
    pub fn new(nights: Vec<NightRecord>) -> Result<Self> {
        for (expected, night) in (1u32..).zip(nights.iter()) {
            if night.id != expected {
                return Err(CoreError::invalid(
                    "night_id",
                    format!("expected night {expected}, found {}", night.id),
                ));
            }
        }
        Ok(Self { nights })
    }

    pub fn len(&self) -> usize {
        self.nights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nights.is_empty()
    }

    /// Look up a night by its 1-based identifier.
    ///
    /// # Errors
    /// Returns `NotFound` when `night_id` is outside `1..=len`.
    pub fn get(&self, night_id: u32) -> Result<&NightRecord> {
        let not_found = || CoreError::NotFound {
            night_id,
            available: self.nights.len(),
        };
        let idx = (night_id as usize).checked_sub(1).ok_or_else(not_found)?;
        self.nights.get(idx).ok_or_else(not_found)
    }

    /// Leading window of up to `n` nights (collection order, not a suffix).
    pub fn first(&self, n: usize) -> &[NightRecord] {
        &self.nights[..n.min(self.nights.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NightRecord> {
        self.nights.iter()
    }
}

impl<'a> IntoIterator for &'a NightCollection {
    type Item = &'a NightRecord;
    type IntoIter = std::slice::Iter<'a, NightRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.nights.iter()
    }
}
