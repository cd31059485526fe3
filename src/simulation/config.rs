// src/simulation/config.rs

pub const DEFAULT_NUM_SIMULATIONS: usize = 1000;
pub const DEFAULT_FORECAST_DAYS: usize = 90;

/// Minimum gap, in days, between two replenishment orders of one run.
pub const REORDER_COOLDOWN_DAYS: i64 = 5;

/// A day is flagged stockout when more than this share of runs hit zero.
pub const STOCKOUT_PATH_FRACTION: f64 = 0.10;

/// A day is flagged overstock when more than this share of runs are overstocked.
pub const OVERSTOCK_PATH_FRACTION: f64 = 0.50;

/// A run is overstocked when inventory exceeds this many reorder quantities.
pub const OVERSTOCK_REORDER_MULTIPLE: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub num_simulations: usize,
    pub forecast_days: usize,
    /// `None` draws a fresh base seed from the thread RNG on every call.
    pub seed: Option<u64>,
    pub reorder_cooldown_days: i64,
    pub stockout_path_fraction: f64,
    pub overstock_path_fraction: f64,
    pub overstock_reorder_multiple: f64,
}

impl SimulationConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            forecast_days: DEFAULT_FORECAST_DAYS,
            seed: None,
            reorder_cooldown_days: REORDER_COOLDOWN_DAYS,
            stockout_path_fraction: STOCKOUT_PATH_FRACTION,
            overstock_path_fraction: OVERSTOCK_PATH_FRACTION,
            overstock_reorder_multiple: OVERSTOCK_REORDER_MULTIPLE,
        }
    }
}
