// src/simulation/engine.rs

use crate::model::orders::PendingOrders;
use crate::model::sku::AdjustedParams;
use crate::simulation::demand::sample_demand;
use crate::strategy::traits::{ReorderContext, ReorderPolicy};
use rand::RngCore;

/// What one run observed at the end of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayOutcome {
    pub inventory: f64,
    pub demand: f64,
    pub stockout: bool,
    pub overstock: bool,
}

/// A single stochastic inventory trajectory for one SKU.
pub struct ReplenishmentRun<P: ReorderPolicy> {
    params: AdjustedParams,
    policy: P,
    overstock_threshold: f64,

    // State Variables
    inventory: f64,
    pending: PendingOrders,
    current_day: i64,

    history: Vec<DayOutcome>,
}

impl<P: ReorderPolicy> ReplenishmentRun<P> {
    /// `overstock_multiple` is how many reorder quantities count as overstock.
    pub fn new(params: AdjustedParams, policy: P, overstock_multiple: f64) -> Self {
        Self {
            overstock_threshold: params.reorder_quantity * overstock_multiple,
            inventory: params.initial_inventory.max(0.0),
            params,
            policy,
            pending: PendingOrders::new(),
            current_day: 0,
            history: Vec::new(),
        }
    }

    /// Runs `forecast_days` days and returns the per-day outcomes.
    pub fn run<R: RngCore>(mut self, forecast_days: usize, rng: &mut R) -> Vec<DayOutcome> {
        self.history.reserve(forecast_days);
        for _ in 0..forecast_days {
            self.step(rng);
        }
        self.history
    }

    fn step<R: RngCore>(&mut self, rng: &mut R) {
        let day = self.current_day;

        // PHASE 1: Arrivals due today
        self.inventory += self.pending.take_arrivals(day);

        // PHASE 2: Demand
        let demand = sample_demand(
            rng,
            self.params.daily_sales,
            self.params.demand_std_dev(),
        );
        self.inventory = (self.inventory - demand).max(0.0);

        // PHASE 3: Reorder decision
        let context = ReorderContext {
            day,
            inventory: self.inventory,
        };
        if let Some(order) = self.policy.place_order(&context, rng) {
            self.pending.push(order);
        }

        // PHASE 4: Record & advance
        self.history.push(DayOutcome {
            inventory: self.inventory,
            demand,
            stockout: self.inventory == 0.0,
            overstock: self.inventory > self.overstock_threshold,
        });
        self.current_day += 1;
    }
}
