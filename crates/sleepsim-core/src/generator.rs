//! Synthetic series generation from aggregate parameters.
//!
//! Draws independent samples from a normal distribution and folds them onto
//! non-negative integers: each draw is replaced by its absolute value and then
//! rounded (ties to even). Folding inflates the effective mean of
//! distributions that sit close to zero; that bias is accepted, since a
//! negative lux or decibel reading is physically meaningless.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

use crate::error::{CoreError, Result};
use crate::stats::MetricParams;

/// Random source used for simulation runs.
pub type SimRng = Mcg128Xsl64;

/// Create the simulation RNG.
///
/// `Some(seed)` gives a reproducible stream; `None` seeds from system entropy.
pub fn sim_rng(seed: Option<u64>) -> SimRng {
    match seed {
        Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
        None => Mcg128Xsl64::from_entropy(),
    }
}

/// Sample from N(0, 1) with the Box-Muller transform.
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // gen() yields [0, 1); shift to (0, 1] so ln never sees zero.
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Generate `count` non-negative integer samples from N(mean, std_dev).
///
/// A `count` of zero yields an empty vector.
///
/// # Errors
/// Returns `InvalidParameter` if `std_dev` is negative or either parameter is
/// not finite.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
    count: usize,
) -> Result<Vec<u32>> {
    if !mean.is_finite() {
        return Err(CoreError::invalid("mean", format!("must be finite, got {mean}")));
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(CoreError::invalid(
            "std_dev",
            format!("must be finite and non-negative, got {std_dev}"),
        ));
    }

    Ok((0..count)
        .map(|_| {
            let draw = mean + std_dev * standard_normal(&mut *rng);
            draw.abs().round_ties_even() as u32
        })
        .collect())
}

/// Generate `count` samples using a metric's parameters.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    params: MetricParams,
    count: usize,
) -> Result<Vec<u32>> {
    generate(rng, params.mean, params.std_dev, count)
}
