// src/strategy/optimization.rs

//! Steady-state replenishment recommendations.
//!
//! These use the SKU's raw fields only. No randomness, no scenario.

/// Z-score for a 95% cycle service level.
pub const SERVICE_LEVEL_Z: f64 = 1.65;

/// Buffer stock covering demand variability over the lead time.
///
/// # Formula
/// SafetyStock = Z * (DailySales * Variability%) * sqrt(LeadTime)
///
/// # Arguments
/// * `z_score` - Service level z-score (normally [`SERVICE_LEVEL_Z`]).
/// * `daily_sales` - Mean demand per day.
/// * `variability_percent` - Demand coefficient of variation, in percent.
/// * `lead_time_days` - Mean supplier lead time.
pub fn safety_stock(
    z_score: f64,
    daily_sales: f64,
    variability_percent: f64,
    lead_time_days: f64,
) -> u64 {
    let demand_std_dev = daily_sales * (variability_percent / 100.0);
    let raw = z_score * demand_std_dev * lead_time_days.max(0.0).sqrt();
    round_units(raw)
}

/// Reorder point that covers expected lead-time demand plus safety stock.
///
/// Formula: ROP = DailySales * LeadTime + SafetyStock
pub fn optimal_reorder_point(daily_sales: f64, lead_time_days: f64, safety_stock: u64) -> u64 {
    round_units(daily_sales * lead_time_days + safety_stock as f64)
}

fn round_units(value: f64) -> u64 {
    if value.is_nan() || value < 0.0 {
        0
    } else {
        value.round() as u64
    }
}
