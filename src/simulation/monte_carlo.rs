// src/simulation/monte_carlo.rs

//! Monte Carlo driver: many independent replenishment runs, folded into one
//! day-by-day forecast.

use crate::error::RiskResult;
use crate::model::results::SimulationResult;
use crate::model::sku::{AdjustedParams, Sku, WhatIfScenario};
use crate::simulation::cancel::CancelToken;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::{DayOutcome, ReplenishmentRun};
use crate::strategy::implementations::ReorderPointPolicy;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Runs the simulation in parallel with the default (never cancelled) token.
pub fn simulate(
    sku: &Sku,
    config: &SimulationConfig,
    scenario: &WhatIfScenario,
) -> Vec<SimulationResult> {
    simulate_runs(sku, config, scenario, || Ok(())).unwrap_or_default()
}

/// Like [`simulate`], but checks `cancel` before every run.
///
/// Returns `Err` instead of a partial forecast when the token fires.
pub fn simulate_cancellable(
    sku: &Sku,
    config: &SimulationConfig,
    scenario: &WhatIfScenario,
    cancel: &CancelToken,
) -> RiskResult<Vec<SimulationResult>> {
    simulate_runs(sku, config, scenario, || cancel.check())
}

/// Sequential variant drawing every run from one caller-supplied generator.
///
/// `config.seed` is ignored; the state of `rng` decides the outcome.
pub fn simulate_with_rng<R: RngCore>(
    sku: &Sku,
    config: &SimulationConfig,
    scenario: &WhatIfScenario,
    rng: &mut R,
) -> Vec<SimulationResult> {
    let params = AdjustedParams::new(sku, scenario);
    let mut tallies = DailyTallies::new(config.forecast_days);
    for _ in 0..config.num_simulations {
        tallies.record_run(&run_once(&params, config, rng));
    }
    tallies.into_results(config, &sku.id)
}

fn simulate_runs<F>(
    sku: &Sku,
    config: &SimulationConfig,
    scenario: &WhatIfScenario,
    checkpoint: F,
) -> RiskResult<Vec<SimulationResult>>
where
    F: Fn() -> RiskResult<()> + Sync,
{
    let params = AdjustedParams::new(sku, scenario);
    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    debug!(
        sku = %sku.id,
        runs = config.num_simulations,
        days = config.forecast_days,
        seeded = config.seed.is_some(),
        "simulating"
    );

    // Each run owns a distinct ChaCha stream, so results do not depend on
    // how rayon splits the work. Collecting preserves run order, which keeps
    // the floating-point sums below identical across thread counts.
    let traces = (0..config.num_simulations)
        .into_par_iter()
        .map(|run| {
            checkpoint()?;
            let mut rng = ChaCha8Rng::seed_from_u64(base_seed);
            rng.set_stream(run as u64);
            Ok(run_once(&params, config, &mut rng))
        })
        .collect::<RiskResult<Vec<_>>>()?;

    let mut tallies = DailyTallies::new(config.forecast_days);
    for trace in &traces {
        tallies.record_run(trace);
    }
    Ok(tallies.into_results(config, &sku.id))
}

fn run_once<R: RngCore>(
    params: &AdjustedParams,
    config: &SimulationConfig,
    rng: &mut R,
) -> Vec<DayOutcome> {
    let policy = ReorderPointPolicy::from_params(params, config.reorder_cooldown_days);
    ReplenishmentRun::new(*params, policy, config.overstock_reorder_multiple)
        .run(config.forecast_days, rng)
}

#[derive(Debug, Clone, Copy, Default)]
struct DailyTally {
    inventory_sum: f64,
    demand_sum: f64,
    stockouts: usize,
    overstocks: usize,
}

/// Per-day running sums across runs.
struct DailyTallies {
    days: Vec<DailyTally>,
    runs: usize,
}

impl DailyTallies {
    fn new(forecast_days: usize) -> Self {
        Self {
            days: vec![DailyTally::default(); forecast_days],
            runs: 0,
        }
    }

    fn record_run(&mut self, trace: &[DayOutcome]) {
        for (tally, outcome) in self.days.iter_mut().zip(trace) {
            tally.inventory_sum += outcome.inventory;
            tally.demand_sum += outcome.demand;
            tally.stockouts += usize::from(outcome.stockout);
            tally.overstocks += usize::from(outcome.overstock);
        }
        self.runs += 1;
    }

    fn into_results(self, config: &SimulationConfig, sku_id: &str) -> Vec<SimulationResult> {
        if self.runs == 0 {
            warn!(sku = %sku_id, "no simulation runs requested; forecast is empty");
            return Vec::new();
        }
        let runs = self.runs as f64;
        let stockout_cutoff = runs * config.stockout_path_fraction;
        let overstock_cutoff = runs * config.overstock_path_fraction;

        self.days
            .iter()
            .enumerate()
            .map(|(index, tally)| SimulationResult {
                day: (index + 1) as u32,
                inventory_level: (tally.inventory_sum / runs).round() as u64,
                demand: (tally.demand_sum / runs).round() as u64,
                stockout: tally.stockouts as f64 > stockout_cutoff,
                overstock: tally.overstocks as f64 > overstock_cutoff,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RiskError;
    use crate::model::sku::test_sku;

    fn small_config(seed: u64) -> SimulationConfig {
        SimulationConfig {
            num_simulations: 200,
            forecast_days: 30,
            ..SimulationConfig::seeded(seed)
        }
    }

    #[test]
    fn output_has_one_row_per_day() {
        let results = simulate(&test_sku("A"), &small_config(1), &WhatIfScenario::IDENTITY);
        assert_eq!(results.len(), 30);
        for (i, row) in results.iter().enumerate() {
            assert_eq!(row.day as usize, i + 1);
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = small_config(1234);
        let a = simulate(&test_sku("A"), &config, &WhatIfScenario::IDENTITY);
        let b = simulate(&test_sku("A"), &config, &WhatIfScenario::IDENTITY);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_runs_yield_empty_forecast() {
        let config = SimulationConfig {
            num_simulations: 0,
            ..small_config(1)
        };
        assert!(simulate(&test_sku("A"), &config, &WhatIfScenario::IDENTITY).is_empty());
    }

    #[test]
    fn deterministic_sku_aggregates_exactly() {
        let mut sku = test_sku("D");
        sku.current_inventory = 30.0;
        sku.sales_variability = 0.0;
        sku.lead_time_variability = 0.0;
        sku.lead_time_days = 3.0;
        sku.reorder_point = 15.0;
        sku.reorder_quantity = 40.0;
        let config = SimulationConfig {
            num_simulations: 10,
            forecast_days: 4,
            ..SimulationConfig::default()
        };
        let results = simulate(&sku, &config, &WhatIfScenario::IDENTITY);
        let levels: Vec<u64> = results.iter().map(|r| r.inventory_level).collect();
        assert_eq!(levels, vec![20, 10, 0, 0]);
        assert!(results[2].stockout && results[3].stockout);
        assert!(!results[0].stockout);
        assert!(results.iter().all(|r| r.demand == 10 && !r.overstock));
    }

    #[test]
    fn injected_generator_drives_the_sequential_path() {
        let config = small_config(0);
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let mut b = ChaCha8Rng::seed_from_u64(5);
        let sku = test_sku("A");
        assert_eq!(
            simulate_with_rng(&sku, &config, &WhatIfScenario::IDENTITY, &mut a),
            simulate_with_rng(&sku, &config, &WhatIfScenario::IDENTITY, &mut b)
        );
    }

    #[test]
    fn cancelled_token_publishes_nothing() {
        let token = CancelToken::new();
        token.cancel();
        let result =
            simulate_cancellable(&test_sku("A"), &small_config(1), &WhatIfScenario::IDENTITY, &token);
        assert!(matches!(result, Err(RiskError::Cancelled)));
    }
}
