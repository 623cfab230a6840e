//! Batch construction of simulated nights.
//!
//! Generator parameters are derived once from a historical baseline and then
//! reused for every night. Each night is generated independently:
//! 1. Draw every night's minutes slept from the duration distribution
//! 2. For each night, draw one series per metric of that length
//! 3. Number nights sequentially from 1 in generation order

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::generator::{generate, generate_with};
use crate::metric::MetricKind;
use crate::night::{NightCollection, NightRecord};
use crate::series::ReadingSeries;
use crate::stats::{summarize, MetricParams, SummaryStatistics};

/// Night count used by the reference configuration
pub const DEFAULT_NIGHTS: usize = 100;
/// Mean minutes slept per night
pub const DEFAULT_DURATION_MEAN: f64 = 480.0;
/// Standard deviation of minutes slept per night
pub const DEFAULT_DURATION_STD: f64 = 20.0;

/// Generator parameters for every metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineParams {
    pub light: MetricParams,
    pub sound: MetricParams,
    pub temperature: MetricParams,
    pub movement: MetricParams,
}

impl BaselineParams {
    pub fn get(&self, kind: MetricKind) -> MetricParams {
        match kind {
            MetricKind::Light => self.light,
            MetricKind::Sound => self.sound,
            MetricKind::Temperature => self.temperature,
            MetricKind::Movement => self.movement,
        }
    }
}

/// Historical readings from a real night, one series per metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineReadings {
    pub light: ReadingSeries,
    pub sound: ReadingSeries,
    pub temperature: ReadingSeries,
    pub movement: ReadingSeries,
}

impl BaselineReadings {
    pub fn series(&self, kind: MetricKind) -> &ReadingSeries {
        match kind {
            MetricKind::Light => &self.light,
            MetricKind::Sound => &self.sound,
            MetricKind::Temperature => &self.temperature,
            MetricKind::Movement => &self.movement,
        }
    }

    /// Derive generator parameters from the historical series.
    ///
    /// # Errors
    /// Returns `EmptyInput` if any series is empty.
    pub fn params(&self) -> Result<BaselineParams> {
        Ok(BaselineParams {
            light: MetricParams::from_series(&self.light)?,
            sound: MetricParams::from_series(&self.sound)?,
            temperature: MetricParams::from_series(&self.temperature)?,
            movement: MetricParams::from_series(&self.movement)?,
        })
    }

    /// Summaries of all four historical series, movement included.
    ///
    /// # Errors
    /// Returns `EmptyInput` if any series is empty.
    pub fn summaries(&self) -> Result<Vec<(MetricKind, SummaryStatistics)>> {
        MetricKind::ALL
            .into_iter()
            .map(|kind| Ok((kind, summarize(self.series(kind))?)))
            .collect()
    }
}

/// Build `n` nights with durations drawn from N(duration_mean, duration_std).
///
/// Nights whose drawn duration is zero get four empty series.
///
/// # Errors
/// Returns `InvalidParameter` if the duration or any metric parameters are
/// rejected by the generator.
pub fn build_nights<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    duration_mean: f64,
    duration_std: f64,
    params: &BaselineParams,
) -> Result<NightCollection> {
    let durations = generate(rng, duration_mean, duration_std, n)?;
    debug!(
        nights = n,
        duration_mean, duration_std, "generated night durations"
    );

    let mut nights = Vec::with_capacity(n);
    for (id, minutes_slept) in (1u32..).zip(durations) {
        let count = minutes_slept as usize;
        let mut draw = |kind: MetricKind| -> Result<ReadingSeries> {
            Ok(generate_with(&mut *rng, params.get(kind), count)?.into())
        };
        let light = draw(MetricKind::Light)?;
        let sound = draw(MetricKind::Sound)?;
        let temperature = draw(MetricKind::Temperature)?;
        let movement = draw(MetricKind::Movement)?;

        nights.push(NightRecord::new(
            id,
            minutes_slept,
            light,
            sound,
            temperature,
            movement,
        )?);
    }

    debug!(nights = nights.len(), "built night collection");
    NightCollection::new(nights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::generator::sim_rng;

    fn params() -> BaselineParams {
        BaselineParams {
            light: MetricParams::new(5.0, 3.0),
            sound: MetricParams::new(35.0, 8.0),
            temperature: MetricParams::new(20.0, 1.5),
            movement: MetricParams::new(40.0, 25.0),
        }
    }

    #[test]
    fn test_builds_requested_nights_in_order() {
        let mut rng = sim_rng(Some(42));
        let nights = build_nights(&mut rng, 12, 480.0, 20.0, &params()).unwrap();

        assert_eq!(nights.len(), 12);
        for (expected, night) in (1u32..).zip(nights.iter()) {
            assert_eq!(night.id(), expected);
            for kind in MetricKind::ALL {
                assert_eq!(night.series(kind).len(), night.minutes_slept() as usize);
            }
        }
    }

    #[test]
    fn test_zero_nights() {
        let mut rng = sim_rng(Some(1));
        let nights = build_nights(&mut rng, 0, 480.0, 20.0, &params()).unwrap();
        assert!(nights.is_empty());
    }

    #[test]
    fn test_zero_minute_nights_do_not_fail() {
        let mut rng = sim_rng(Some(1));
        let nights = build_nights(&mut rng, 5, 0.0, 0.0, &params()).unwrap();
        assert_eq!(nights.len(), 5);
        assert!(nights.iter().all(|n| n.minutes_slept() == 0));
        assert!(nights.iter().all(|n| n.series(MetricKind::Movement).is_empty()));
    }

    #[test]
    fn test_same_seed_same_collection() {
        let a = build_nights(&mut sim_rng(Some(9)), 4, 480.0, 20.0, &params()).unwrap();
        let b = build_nights(&mut sim_rng(Some(9)), 4, 480.0, 20.0, &params()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_metric_params_propagate() {
        let mut bad = params();
        bad.sound = MetricParams::new(35.0, -2.0);
        let err = build_nights(&mut sim_rng(Some(1)), 3, 480.0, 20.0, &bad).unwrap_err();
        assert!(matches!(err, CoreError::InvalidParameter { .. }));
    }

    #[test]
    fn test_baseline_params_and_summaries() {
        let readings = BaselineReadings {
            light: ReadingSeries::from_values([1.0, 2.0, 3.0]).unwrap(),
            sound: ReadingSeries::from_values([30.0, 30.0]).unwrap(),
            temperature: ReadingSeries::from_values([19.5, 20.5]).unwrap(),
            movement: ReadingSeries::from_values([0.0, 10.0, 200.0, 5.0]).unwrap(),
        };

        let p = readings.params().unwrap();
        assert_eq!(p.light, MetricParams::new(2.0, 0.82));
        assert_eq!(p.sound, MetricParams::new(30.0, 0.0));
        assert_eq!(p.temperature, MetricParams::new(20.0, 0.5));

        let summaries = readings.summaries().unwrap();
        let kinds: Vec<_> = summaries.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, MetricKind::ALL.to_vec());
        assert!(summaries[3].1.is_out_of_range);
    }

    #[test]
    fn test_baseline_with_empty_series_fails() {
        let readings = BaselineReadings {
            light: ReadingSeries::default(),
            sound: ReadingSeries::from_values([1.0]).unwrap(),
            temperature: ReadingSeries::from_values([1.0]).unwrap(),
            movement: ReadingSeries::from_values([1.0]).unwrap(),
        };
        assert!(matches!(readings.params(), Err(CoreError::EmptyInput { .. })));
    }
}
