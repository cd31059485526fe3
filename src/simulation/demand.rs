// src/simulation/demand.rs

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Draws one day's demand from Normal(mean, std_dev), floored at zero.
///
/// The generator is supplied by the caller so seeded runs are reproducible.
/// A zero (or otherwise degenerate) standard deviation collapses to the mean
/// without consuming randomness.
///
/// # Arguments
/// * `rng` - Source of uniform draws.
/// * `mean` - Expected daily demand (e.g., 10.0).
/// * `std_dev` - Day-to-day spread of demand in units (e.g., 2.0 for 20% of 10).
pub fn sample_demand<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    clamp_non_negative(sample_normal(rng, mean, std_dev))
}

/// Unclamped normal draw shared by the demand and lead-time samplers.
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return mean;
    }
    match Normal::new(mean, std_dev) {
        Ok(normal) => normal.sample(rng),
        // Non-finite std dev: no meaningful spread to sample from.
        Err(_) => mean,
    }
}

pub fn clamp_non_negative(value: f64) -> f64 {
    if value < 0.0 || value.is_nan() {
        0.0
    } else {
        value
    }
}
