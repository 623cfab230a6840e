//! # Sleepsim Core Library
//!
//! This library provides the computational core of sleepsim: descriptive
//! statistics over per-minute sleep sensor readings, and a simulator that
//! builds a database of synthetic nights to answer "what if" questions.
//! Formatting, prompting and plotting are left to the CLI.
//!
//! ## Architecture
//!
//! - **Statistics**: mean/median/std/quartiles and a one-sided outlier check
//! - **Generator**: folded normal samples from aggregate mean/std parameters
//! - **Builder**: batches of night records drawn from a historical baseline
//! - **What-if**: sleep-sufficiency and environment-quality queries
//!
//! ## Key Components
//!
//! - [`summarize`]: Statistics over a [`ReadingSeries`]
//! - [`generate`]: Synthetic series with an injectable RNG
//! - [`build_nights`]: Produces a [`NightCollection`]
//! - [`enough_sleep`] / [`sleep_quality`]: What-if queries

pub mod builder;
pub mod error;
pub mod generator;
pub mod metric;
pub mod night;
pub mod series;
pub mod stats;
pub mod whatif;

pub use builder::{build_nights, BaselineParams, BaselineReadings};
pub use error::{CoreError, Result};
pub use generator::{generate, sim_rng, SimRng};
pub use metric::MetricKind;
pub use night::{NightCollection, NightOverview, NightRecord, SleepDuration};
pub use series::ReadingSeries;
pub use stats::{summarize, MetricParams, SummaryStatistics};
pub use whatif::{
    enough_sleep, sleep_quality, EnvironmentReport, SleepSufficiencyReport, SleepWindow,
    WindowResult,
};
