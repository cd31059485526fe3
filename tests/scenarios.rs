//! End-to-end forecasts for hand-picked SKUs.
//!
//! Every test that makes a statistical claim runs seeded so it cannot flake.

use inventory_risk::analysis::risk::days_of_supply;
use inventory_risk::{
    aggregate_metrics, analyze_risk, analyze_risk_with, simulate, RiskError, RiskPolicy,
    SimulationConfig, Sku, WhatIfScenario,
};

fn sku(id: &str, current_inventory: f64, daily_sales_rate: f64) -> Sku {
    Sku {
        id: id.to_string(),
        name: format!("Item {}", id),
        current_inventory,
        daily_sales_rate,
        sales_variability: 20.0,
        lead_time_days: 7.0,
        lead_time_variability: 2.0,
        reorder_point: 50.0,
        reorder_quantity: 100.0,
        unit_cost: 10.0,
        holding_cost_percent: 18.0,
    }
}

#[test]
fn low_stock_sku_is_flagged_for_understock() {
    let low = sku("LOW", 20.0, 10.0);
    let analysis = analyze_risk_with(
        &low,
        &WhatIfScenario::IDENTITY,
        &SimulationConfig::seeded(2024),
        &RiskPolicy::default(),
    );

    assert_eq!(analysis.days_of_supply, 2);
    assert!(
        analysis.understock_risk >= 50,
        "understock risk = {}",
        analysis.understock_risk
    );
    assert_eq!(analysis.simulation_results.len(), 90);
    assert!(analysis.projected_stockout.is_some());
}

#[test]
fn huge_stock_lands_in_the_top_dead_inventory_band() {
    let slow = sku("SLOW", 10_000.0, 5.0);
    let policy = RiskPolicy::default();
    assert_eq!(days_of_supply(&slow, &policy), 2000);

    // Independent of the random draws.
    for seed in [1, 2, 3] {
        let config = SimulationConfig {
            num_simulations: 100,
            ..SimulationConfig::seeded(seed)
        };
        let analysis = analyze_risk_with(&slow, &WhatIfScenario::IDENTITY, &config, &policy);
        assert_eq!(analysis.dead_inventory_risk, 80);
        assert_eq!(analysis.overstock_risk, 100);
        assert_eq!(analysis.understock_risk, 0);
    }
}

#[test]
fn more_starting_stock_does_not_raise_understock_risk() {
    let base = sku("MONO", 60.0, 10.0);
    let policy = RiskPolicy::default();
    let mean_understock = |multiplier: f64| -> f64 {
        let scenario = WhatIfScenario {
            inventory_multiplier: multiplier,
            ..WhatIfScenario::IDENTITY
        };
        let total: u32 = (0..5)
            .map(|seed| {
                let config = SimulationConfig {
                    num_simulations: 400,
                    ..SimulationConfig::seeded(100 + seed)
                };
                analyze_risk_with(&base, &scenario, &config, &policy).understock_risk
            })
            .sum();
        total as f64 / 5.0
    };

    let lean = mean_understock(0.5);
    let normal = mean_understock(1.0);
    let stocked = mean_understock(3.0);
    assert!(normal <= lean + 5.0, "lean {} normal {}", lean, normal);
    assert!(stocked <= normal + 5.0, "normal {} stocked {}", normal, stocked);
}

#[test]
fn explicit_identity_scenario_matches_default_path() {
    let item = sku("ID", 150.0, 12.0);
    let config = SimulationConfig::seeded(77);
    let policy = RiskPolicy::default();

    let implicit = analyze_risk_with(&item, &WhatIfScenario::default(), &config, &policy);
    let explicit = analyze_risk_with(
        &item,
        &WhatIfScenario {
            inventory_multiplier: 1.0,
            demand_multiplier: 1.0,
            lead_time_multiplier: 1.0,
            variability_multiplier: 1.0,
        },
        &config,
        &policy,
    );
    assert_eq!(implicit, explicit);
}

#[test]
fn unseeded_identity_runs_agree_statistically() {
    let item = sku("STAT", 150.0, 12.0);
    let a = analyze_risk(&item, &WhatIfScenario::IDENTITY);
    let b = analyze_risk(&item, &WhatIfScenario::default());

    let mean_level = |results: &[inventory_risk::SimulationResult]| -> f64 {
        results.iter().map(|r| r.inventory_level as f64).sum::<f64>() / results.len() as f64
    };
    let diff = (mean_level(&a.simulation_results) - mean_level(&b.simulation_results)).abs();
    assert!(diff < 5.0, "mean inventory differs by {}", diff);
    assert_eq!(a.safety_stock, b.safety_stock);
    assert_eq!(a.optimal_reorder_point, b.optimal_reorder_point);
}

#[test]
fn custom_horizon_and_run_count_are_honoured() {
    let config = SimulationConfig {
        num_simulations: 25,
        forecast_days: 45,
        ..SimulationConfig::seeded(3)
    };
    let results = simulate(&sku("H", 80.0, 4.0), &config, &WhatIfScenario::IDENTITY);
    assert_eq!(results.len(), 45);
    assert_eq!(results.first().map(|r| r.day), Some(1));
    assert_eq!(results.last().map(|r| r.day), Some(45));
}

#[test]
fn portfolio_metrics_over_real_analyses() {
    let skus = vec![sku("A", 20.0, 10.0), sku("B", 10_000.0, 5.0)];
    let config = SimulationConfig {
        num_simulations: 200,
        ..SimulationConfig::seeded(9)
    };
    let policy = RiskPolicy::default();
    let analyses: Vec<_> = skus
        .iter()
        .map(|s| analyze_risk_with(s, &WhatIfScenario::IDENTITY, &config, &policy))
        .collect();

    let metrics = aggregate_metrics(&skus, &analyses, &policy).unwrap();
    assert_eq!(metrics.total_skus, 2);
    assert_eq!(metrics.at_risk_skus, 2);
    assert_eq!(metrics.healthy_skus, 0);
    assert_eq!(metrics.total_inventory_value, 100_200);
    // B alone: 1.0 * 100000 * 0.2 + 0.8 * 100000 * 0.5 = 60000
    assert!(metrics.projected_losses >= 60_000);

    let reversed: Vec<_> = analyses.into_iter().rev().collect();
    assert!(matches!(
        aggregate_metrics(&skus, &reversed, &policy),
        Err(RiskError::MisalignedAnalysis { .. })
    ));
    assert!(matches!(
        aggregate_metrics(&[], &[], &policy),
        Err(RiskError::EmptyPortfolio)
    ));
}
