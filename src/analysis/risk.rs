// src/analysis/risk.rs

use crate::analysis::policy::{RiskPolicy, LOW_RISK_CEILING, MEDIUM_RISK_CEILING};
use crate::error::RiskResult;
use crate::model::results::{RiskAnalysis, RiskLevel, SimulationResult};
use crate::model::sku::{Sku, WhatIfScenario};
use crate::simulation::cancel::CancelToken;
use crate::simulation::config::SimulationConfig;
use crate::simulation::monte_carlo::{simulate, simulate_cancellable};
use crate::strategy::optimization::{optimal_reorder_point, safety_stock};

/// Simulates `sku` with 1000 runs over 90 days and scores the outcome.
pub fn analyze_risk(sku: &Sku, scenario: &WhatIfScenario) -> RiskAnalysis {
    analyze_risk_with(
        sku,
        scenario,
        &SimulationConfig::default(),
        &RiskPolicy::default(),
    )
}

pub fn analyze_risk_with(
    sku: &Sku,
    scenario: &WhatIfScenario,
    config: &SimulationConfig,
    policy: &RiskPolicy,
) -> RiskAnalysis {
    assess(sku, simulate(sku, config, scenario), policy)
}

pub fn analyze_risk_cancellable(
    sku: &Sku,
    scenario: &WhatIfScenario,
    config: &SimulationConfig,
    policy: &RiskPolicy,
    cancel: &CancelToken,
) -> RiskResult<RiskAnalysis> {
    let results = simulate_cancellable(sku, config, scenario, cancel)?;
    Ok(assess(sku, results, policy))
}

/// Derives the risk scores from an already simulated forecast.
///
/// Stockout and overstock risk are shares of the forecast horizon (the length
/// of `results`). Safety stock and the recommended reorder point come from the
/// SKU's own fields, not the scenario the forecast was run under.
pub fn assess(sku: &Sku, results: Vec<SimulationResult>, policy: &RiskPolicy) -> RiskAnalysis {
    let horizon = results.len();
    let stockout_days = results.iter().filter(|r| r.stockout).count();
    let overstock_days = results.iter().filter(|r| r.overstock).count();

    let days_of_supply = days_of_supply(sku, policy);
    let safety = safety_stock(
        policy.z_score,
        sku.daily_sales_rate,
        sku.sales_variability,
        sku.lead_time_days,
    );

    RiskAnalysis {
        sku_id: sku.id.clone(),
        overstock_risk: day_share_score(overstock_days, horizon, 1.0),
        understock_risk: day_share_score(stockout_days, horizon, policy.understock_weight),
        dead_inventory_risk: dead_inventory_risk(days_of_supply, policy),
        days_of_supply,
        projected_stockout: results.iter().find(|r| r.stockout).map(|r| r.day),
        safety_stock: safety,
        optimal_reorder_point: optimal_reorder_point(
            sku.daily_sales_rate,
            sku.lead_time_days,
            safety,
        ),
        simulation_results: results,
    }
}

/// Current stock over daily sales, or the sentinel when nothing sells.
pub fn days_of_supply(sku: &Sku, policy: &RiskPolicy) -> u64 {
    if sku.daily_sales_rate > 0.0 {
        (sku.current_inventory.max(0.0) / sku.daily_sales_rate).round() as u64
    } else {
        policy.days_of_supply_sentinel
    }
}

/// Coarse banding of days of supply.
pub fn dead_inventory_risk(days_of_supply: u64, policy: &RiskPolicy) -> u32 {
    policy
        .dead_inventory_bands
        .iter()
        .find(|(above, _)| days_of_supply > *above)
        .map(|(_, score)| *score)
        .unwrap_or(policy.dead_inventory_floor)
        .min(100)
}

/// `flagged / horizon` as a weighted percentage, clamped to 0..=100.
fn day_share_score(flagged: usize, horizon: usize, weight: f64) -> u32 {
    if horizon == 0 {
        return 0;
    }
    let score = (flagged as f64 / horizon as f64) * 100.0 * weight;
    score.round().clamp(0.0, 100.0) as u32
}

pub fn risk_level(score: u32) -> RiskLevel {
    if score <= LOW_RISK_CEILING {
        RiskLevel::Low
    } else if score <= MEDIUM_RISK_CEILING {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Plain-language summary of what the analysis suggests doing.
pub fn explain(analysis: &RiskAnalysis, sku: &Sku, policy: &RiskPolicy) -> String {
    let mut notes = Vec::new();

    if analysis.understock_risk > policy.at_risk_threshold {
        notes.push(format!(
            "High stockout risk: about {} days of supply remain. Consider reordering soon.",
            analysis.days_of_supply
        ));
    }
    if analysis.overstock_risk > policy.at_risk_threshold {
        notes.push(
            "Excess inventory: current stock is likely to sell slower than it is replenished, tying up capital."
                .to_string(),
        );
    }
    if analysis.dead_inventory_risk > policy.slow_moving_threshold {
        notes.push(
            "Slow-moving inventory: this item may become dead stock. Consider promotions or markdowns."
                .to_string(),
        );
    }

    let diff = analysis.optimal_reorder_point as f64 - sku.reorder_point;
    if diff != 0.0 {
        notes.push(format!(
            "Recommended reorder point adjustment: {} by {} units for a 95% service level.",
            if diff > 0.0 { "increase" } else { "decrease" },
            (diff.abs() * 100.0).round() / 100.0
        ));
    }

    if notes.is_empty() {
        notes.push(
            "Inventory levels look healthy. The current replenishment strategy is working."
                .to_string(),
        );
    }
    notes.join(" ")
}
