// src/analysis/compare.rs

use crate::analysis::policy::RiskPolicy;
use crate::analysis::risk::analyze_risk_with;
use crate::model::results::RiskAnalysis;
use crate::model::sku::{Sku, WhatIfScenario};
use crate::simulation::config::SimulationConfig;
use serde::Serialize;

/// Baseline and what-if analyses of one SKU, side by side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub scenario: WhatIfScenario,
    pub baseline: RiskAnalysis,
    pub adjusted: RiskAnalysis,
}

impl ScenarioComparison {
    /// Positive means the scenario raises the risk.
    pub fn understock_delta(&self) -> i64 {
        self.adjusted.understock_risk as i64 - self.baseline.understock_risk as i64
    }

    pub fn overstock_delta(&self) -> i64 {
        self.adjusted.overstock_risk as i64 - self.baseline.overstock_risk as i64
    }

    pub fn dead_inventory_delta(&self) -> i64 {
        self.adjusted.dead_inventory_risk as i64 - self.baseline.dead_inventory_risk as i64
    }
}

/// Runs the baseline and the scenario with the same configuration.
///
/// When `config` is seeded both sides see the same random draws, so the
/// deltas reflect the scenario rather than sampling noise.
pub fn compare_scenario(
    sku: &Sku,
    scenario: &WhatIfScenario,
    config: &SimulationConfig,
    policy: &RiskPolicy,
) -> ScenarioComparison {
    ScenarioComparison {
        scenario: *scenario,
        baseline: analyze_risk_with(sku, &WhatIfScenario::IDENTITY, config, policy),
        adjusted: analyze_risk_with(sku, scenario, config, policy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sku::test_sku;

    #[test]
    fn identity_scenario_with_seed_has_no_deltas() {
        let config = SimulationConfig {
            num_simulations: 200,
            ..SimulationConfig::seeded(21)
        };
        let cmp = compare_scenario(
            &test_sku("A"),
            &WhatIfScenario::IDENTITY,
            &config,
            &RiskPolicy::default(),
        );
        assert_eq!(cmp.understock_delta(), 0);
        assert_eq!(cmp.overstock_delta(), 0);
        assert_eq!(cmp.dead_inventory_delta(), 0);
        assert_eq!(cmp.baseline, cmp.adjusted);
    }

    #[test]
    fn doubling_demand_raises_stockout_risk() {
        let config = SimulationConfig {
            num_simulations: 300,
            ..SimulationConfig::seeded(5)
        };
        let scenario = WhatIfScenario {
            demand_multiplier: 2.0,
            ..WhatIfScenario::IDENTITY
        };
        let cmp = compare_scenario(&test_sku("A"), &scenario, &config, &RiskPolicy::default());
        assert!(cmp.understock_delta() > 0, "delta = {}", cmp.understock_delta());
        // Recommendations ignore the scenario.
        assert_eq!(cmp.baseline.safety_stock, cmp.adjusted.safety_stock);
    }
}
