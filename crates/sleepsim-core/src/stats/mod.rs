//! Statistics module for sleepsim
//!
//! Descriptive statistics over reading series, the one-sided outlier check
//! used to flag disturbing sleep environments, and derivation of generator
//! parameters from historical readings.

mod params;
mod summary;

pub use params::MetricParams;
pub use summary::{percentile, summarize, SummaryStatistics};
