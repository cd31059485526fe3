// src/analysis/policy.rs

use crate::strategy::optimization::SERVICE_LEVEL_Z;

/// Stockout-day share is amplified by this factor before scoring.
pub const UNDERSTOCK_WEIGHT: f64 = 1.5;

/// Days of supply reported when nothing sells.
pub const DAYS_OF_SUPPLY_SENTINEL: u64 = 999;

/// (days-of-supply strictly above, score), checked in order.
pub const DEAD_INVENTORY_BANDS: [(u64, u32); 3] = [(180, 80), (90, 40), (60, 20)];
pub const DEAD_INVENTORY_FLOOR: u32 = 5;

/// A SKU with any risk score strictly above this counts as at risk.
pub const AT_RISK_THRESHOLD: u32 = 50;

/// Dead-inventory score above which a SKU is described as slow-moving.
pub const SLOW_MOVING_THRESHOLD: u32 = 40;

/// Share of overstock-exposed value expected to be lost to markdowns.
pub const OVERSTOCK_LOSS_RATE: f64 = 0.2;

/// Share of dead-stock-exposed value expected to be written off.
pub const DEAD_STOCK_LOSS_RATE: f64 = 0.5;

/// Upper bounds (inclusive) of the low and medium presentation bands.
pub const LOW_RISK_CEILING: u32 = 30;
pub const MEDIUM_RISK_CEILING: u32 = 60;

/// Scoring and loss coefficients of the risk model.
#[derive(Debug, Clone)]
pub struct RiskPolicy {
    pub z_score: f64,
    pub understock_weight: f64,
    pub days_of_supply_sentinel: u64,
    pub dead_inventory_bands: [(u64, u32); 3],
    pub dead_inventory_floor: u32,
    pub at_risk_threshold: u32,
    pub slow_moving_threshold: u32,
    pub overstock_loss_rate: f64,
    pub dead_stock_loss_rate: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            z_score: SERVICE_LEVEL_Z,
            understock_weight: UNDERSTOCK_WEIGHT,
            days_of_supply_sentinel: DAYS_OF_SUPPLY_SENTINEL,
            dead_inventory_bands: DEAD_INVENTORY_BANDS,
            dead_inventory_floor: DEAD_INVENTORY_FLOOR,
            at_risk_threshold: AT_RISK_THRESHOLD,
            slow_moving_threshold: SLOW_MOVING_THRESHOLD,
            overstock_loss_rate: OVERSTOCK_LOSS_RATE,
            dead_stock_loss_rate: DEAD_STOCK_LOSS_RATE,
        }
    }
}
