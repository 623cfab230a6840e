//! Subcommand implementations and the state they share.

pub mod analyze;
pub mod config;
pub mod interactive;
pub mod quality;
pub mod simulate;
pub mod sleep;

use std::path::Path;

use sleepsim_core::{build_nights, sim_rng, BaselineParams, BaselineReadings, NightCollection};

use crate::baseline;
use crate::config::SimConfig;

/// Configuration and historical data resolved from the global flags.
pub struct Context {
    pub config: SimConfig,
    pub baseline: Option<BaselineReadings>,
    seed: Option<u64>,
}

impl Context {
    /// Resolve config and optional historical readings.
    ///
    /// A `seed` given here takes precedence over the configured one.
    pub fn load(
        config_path: Option<&Path>,
        baseline_path: Option<&Path>,
        seed: Option<u64>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = SimConfig::load(config_path)?;
        let baseline = baseline_path.map(baseline::load).transpose()?;
        Ok(Self {
            seed: seed.or(config.simulation.seed),
            config,
            baseline,
        })
    }

    /// Generator parameters: derived from historical readings when present,
    /// otherwise taken from the config.
    pub fn params(&self) -> Result<BaselineParams, Box<dyn std::error::Error>> {
        match &self.baseline {
            Some(readings) => Ok(readings.params()?),
            None => Ok(BaselineParams::from(&self.config.baseline)),
        }
    }

    /// Generate the night collection for this run.
    pub fn nights(&self) -> Result<NightCollection, Box<dyn std::error::Error>> {
        let params = self.params()?;
        let sim = &self.config.simulation;
        let mut rng = sim_rng(self.seed);
        let nights = build_nights(
            &mut rng,
            sim.nights,
            sim.duration_mean,
            sim.duration_std,
            &params,
        )?;
        tracing::info!(nights = nights.len(), seeded = self.seed.is_some(), "simulated nights");
        Ok(nights)
    }
}
