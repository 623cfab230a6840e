//! "What if" queries over a simulated night collection.
//!
//! Both queries are read-only. Windows are taken from the front of the
//! collection: night 1 stands for "last night", nights 1-7 for "last week"
//! and nights 1-30 for "last month".

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::metric::MetricKind;
use crate::night::{NightCollection, NightRecord, SleepDuration};
use crate::stats::{summarize, SummaryStatistics};

/// Aggregation window for the sleep-sufficiency query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepWindow {
    Night,
    Week,
    Month,
}

impl SleepWindow {
    pub const ALL: [SleepWindow; 3] = [SleepWindow::Night, SleepWindow::Week, SleepWindow::Month];

    /// Maximum number of nights the window covers.
    pub fn nights(self) -> usize {
        match self {
            SleepWindow::Night => 1,
            SleepWindow::Week => 7,
            SleepWindow::Month => 30,
        }
    }
}

/// Mean sleep duration over one window compared with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowResult {
    pub window: SleepWindow,
    /// Nights actually averaged (fewer than the window when the collection is short)
    pub nights_counted: usize,
    pub hours: u32,
    pub minutes: u32,
    /// Whole hours reached the target; leftover minutes are ignored
    pub met: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepSufficiencyReport {
    pub target_hours: u32,
    pub last_night: WindowResult,
    pub last_week: WindowResult,
    pub last_month: WindowResult,
}

impl SleepSufficiencyReport {
    pub fn windows(&self) -> [&WindowResult; 3] {
        [&self.last_night, &self.last_week, &self.last_month]
    }
}

fn window_result(window: SleepWindow, nights: &[NightRecord], target_hours: u32) -> WindowResult {
    let total: u64 = nights.iter().map(|n| u64::from(n.minutes_slept())).sum();
    // Callers guarantee a non-empty window.
    let mean_minutes = total / nights.len().max(1) as u64;
    let duration = SleepDuration::from_minutes(u32::try_from(mean_minutes).unwrap_or(u32::MAX));
    WindowResult {
        window,
        nights_counted: nights.len(),
        hours: duration.hours,
        minutes: duration.minutes,
        met: duration.hours >= target_hours,
    }
}

/// Am I getting enough sleep?
///
/// Averages minutes slept (floored to whole minutes) over the first 1, 7 and
/// 30 nights and compares the whole hours against `target_hours`. Bounds on
/// `target_hours` are the caller's concern.
///
/// # Errors
/// Returns `EmptyInput` if the collection has no nights.
pub fn enough_sleep(target_hours: u32, nights: &NightCollection) -> Result<SleepSufficiencyReport> {
    if nights.is_empty() {
        return Err(CoreError::empty("night collection with no nights"));
    }

    let [last_night, last_week, last_month] = SleepWindow::ALL
        .map(|window| window_result(window, nights.first(window.nights()), target_hours));
    debug!(
        target_hours,
        night_met = last_night.met,
        week_met = last_week.met,
        month_met = last_month.met,
        "evaluated sleep sufficiency"
    );

    Ok(SleepSufficiencyReport {
        target_hours,
        last_night,
        last_week,
        last_month,
    })
}

/// Environment statistics for one night.
///
/// Movement is not part of this report; it is only summarized in the
/// historical baseline analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReport {
    pub night_id: u32,
    pub light: SummaryStatistics,
    pub sound: SummaryStatistics,
    pub temperature: SummaryStatistics,
}

impl EnvironmentReport {
    pub fn summaries(&self) -> [(MetricKind, &SummaryStatistics); 3] {
        [
            (MetricKind::Light, &self.light),
            (MetricKind::Sound, &self.sound),
            (MetricKind::Temperature, &self.temperature),
        ]
    }

    pub fn any_out_of_range(&self) -> bool {
        self.summaries().iter().any(|(_, s)| s.is_out_of_range)
    }
}

/// How good was my sleep environment on a given night?
///
/// # Errors
/// Returns `NotFound` if `night_id` is outside `1..=nights.len()`, and
/// `EmptyInput` if that night has zero minutes slept.
pub fn sleep_quality(night_id: u32, nights: &NightCollection) -> Result<EnvironmentReport> {
    let night = nights.get(night_id)?;
    let report = EnvironmentReport {
        night_id,
        light: summarize(night.series(MetricKind::Light))?,
        sound: summarize(night.series(MetricKind::Sound))?,
        temperature: summarize(night.series(MetricKind::Temperature))?,
    };
    debug!(
        night_id,
        out_of_range = report.any_out_of_range(),
        "evaluated sleep environment"
    );
    Ok(report)
}
