// src/strategy/implementations.rs

use crate::model::orders::PendingOrder;
use crate::model::sku::AdjustedParams;
use crate::simulation::demand::{clamp_non_negative, sample_normal};
use crate::strategy::traits::{ReorderContext, ReorderPolicy};
use rand::RngCore;

/// `last_order_day` before any order has been placed.
pub const NEVER_ORDERED: i64 = -999;

// =========================================================================
// Continuous-review reorder point policy
// =========================================================================

/// Orders a fixed quantity whenever on-hand stock falls to the reorder point.
///
/// Only on-hand stock is compared, not the inventory position, so the
/// cooldown is what keeps the policy from ordering again every day while a
/// shipment is still in transit.
#[derive(Debug, Clone)]
pub struct ReorderPointPolicy {
    reorder_point: f64,
    reorder_quantity: f64,
    lead_time_mean: f64,
    lead_time_std_dev: f64,
    cooldown_days: i64,
    last_order_day: i64,
}

impl ReorderPointPolicy {
    pub fn new(
        reorder_point: f64,
        reorder_quantity: f64,
        lead_time_mean: f64,
        lead_time_std_dev: f64,
        cooldown_days: i64,
    ) -> Self {
        Self {
            reorder_point,
            reorder_quantity,
            lead_time_mean,
            lead_time_std_dev,
            cooldown_days,
            last_order_day: NEVER_ORDERED,
        }
    }

    /// Builds the policy from scenario-adjusted SKU parameters.
    pub fn from_params(params: &AdjustedParams, cooldown_days: i64) -> Self {
        Self::new(
            params.reorder_point,
            params.reorder_quantity,
            params.lead_time,
            params.lead_time_std_dev,
            cooldown_days,
        )
    }

    pub fn last_order_day(&self) -> i64 {
        self.last_order_day
    }
}

impl ReorderPolicy for ReorderPointPolicy {
    fn place_order(
        &mut self,
        context: &ReorderContext,
        rng: &mut dyn RngCore,
    ) -> Option<PendingOrder> {
        let below_reorder_point = context.inventory <= self.reorder_point;
        let cooled_down = context.day - self.last_order_day > self.cooldown_days;
        if !(below_reorder_point && cooled_down) {
            return None;
        }

        let lead_time =
            clamp_non_negative(sample_normal(rng, self.lead_time_mean, self.lead_time_std_dev))
                .round();
        self.last_order_day = context.day;

        // `as` saturates huge lead times at i64::MAX; the order then never arrives.
        Some(PendingOrder {
            arrival_day: context.day.saturating_add(lead_time as i64),
            quantity: self.reorder_quantity,
        })
    }
}
