// src/model/sku.rs

use crate::error::{RiskError, RiskResult};
use serde::{Deserialize, Serialize};

/// One stock-keeping unit as supplied by the caller.
///
/// Quantities are `f64` because simulated demand is continuous; rounding only
/// happens when results are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    pub id: String,
    pub name: String,
    pub current_inventory: f64,
    pub daily_sales_rate: f64,
    /// Coefficient of variation of daily demand, in percent of the mean.
    pub sales_variability: f64,
    pub lead_time_days: f64,
    /// Standard deviation of the lead time, in days.
    pub lead_time_variability: f64,
    pub reorder_point: f64,
    pub reorder_quantity: f64,
    pub unit_cost: f64,
    /// Annual holding cost. Carried for reporting; the simulator ignores it.
    pub holding_cost_percent: f64,
}

impl Sku {
    /// Value of the stock on hand at unit cost.
    pub fn inventory_value(&self) -> f64 {
        self.current_inventory * self.unit_cost
    }

    /// Strict field check for collaborators that want to reject bad records
    /// up front. The analysis path does not call this; it falls back to
    /// sentinels instead.
    pub fn validate(&self) -> RiskResult<()> {
        let fields = [
            ("currentInventory", self.current_inventory),
            ("dailySalesRate", self.daily_sales_rate),
            ("salesVariability", self.sales_variability),
            ("leadTimeDays", self.lead_time_days),
            ("leadTimeVariability", self.lead_time_variability),
            ("reorderPoint", self.reorder_point),
            ("reorderQuantity", self.reorder_quantity),
            ("unitCost", self.unit_cost),
            ("holdingCostPercent", self.holding_cost_percent),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(RiskError::InvalidInput(format!(
                    "{}: {} must be finite and non-negative, got {}",
                    self.id, name, value
                )));
            }
        }
        if self.daily_sales_rate <= 0.0 {
            return Err(RiskError::InvalidInput(format!(
                "{}: dailySalesRate must be positive",
                self.id
            )));
        }
        if self.lead_time_days <= 0.0 || self.reorder_quantity <= 0.0 {
            return Err(RiskError::InvalidInput(format!(
                "{}: leadTimeDays and reorderQuantity must be positive",
                self.id
            )));
        }
        Ok(())
    }
}

/// Multiplicative what-if adjustments applied before simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfScenario {
    pub inventory_multiplier: f64,
    pub demand_multiplier: f64,
    pub lead_time_multiplier: f64,
    pub variability_multiplier: f64,
}

impl WhatIfScenario {
    pub const IDENTITY: WhatIfScenario = WhatIfScenario {
        inventory_multiplier: 1.0,
        demand_multiplier: 1.0,
        lead_time_multiplier: 1.0,
        variability_multiplier: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn validate(&self) -> RiskResult<()> {
        let multipliers = [
            ("inventoryMultiplier", self.inventory_multiplier),
            ("demandMultiplier", self.demand_multiplier),
            ("leadTimeMultiplier", self.lead_time_multiplier),
            ("variabilityMultiplier", self.variability_multiplier),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value <= 0.0 {
                return Err(RiskError::InvalidInput(format!(
                    "scenario {} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for WhatIfScenario {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// SKU parameters after the scenario multipliers are applied.
///
/// Lead-time standard deviation is deliberately left unscaled, as are the
/// reorder point and quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedParams {
    pub initial_inventory: f64,
    pub daily_sales: f64,
    pub variability_percent: f64,
    pub lead_time: f64,
    pub lead_time_std_dev: f64,
    pub reorder_point: f64,
    pub reorder_quantity: f64,
}

impl AdjustedParams {
    pub fn new(sku: &Sku, scenario: &WhatIfScenario) -> Self {
        Self {
            initial_inventory: sku.current_inventory * scenario.inventory_multiplier,
            daily_sales: sku.daily_sales_rate * scenario.demand_multiplier,
            variability_percent: sku.sales_variability * scenario.variability_multiplier,
            lead_time: sku.lead_time_days * scenario.lead_time_multiplier,
            lead_time_std_dev: sku.lead_time_variability,
            reorder_point: sku.reorder_point,
            reorder_quantity: sku.reorder_quantity,
        }
    }

    /// Standard deviation of one day's demand.
    pub fn demand_std_dev(&self) -> f64 {
        self.daily_sales * (self.variability_percent / 100.0)
    }
}

#[cfg(test)]
pub(crate) fn test_sku(id: &str) -> Sku {
    Sku {
        id: id.to_string(),
        name: format!("Test {}", id),
        current_inventory: 100.0,
        daily_sales_rate: 10.0,
        sales_variability: 20.0,
        lead_time_days: 7.0,
        lead_time_variability: 2.0,
        reorder_point: 50.0,
        reorder_quantity: 100.0,
        unit_cost: 25.0,
        holding_cost_percent: 18.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_scenario_leaves_params_untouched() {
        let sku = test_sku("A");
        let params = AdjustedParams::new(&sku, &WhatIfScenario::default());
        assert_eq!(params.initial_inventory, 100.0);
        assert_eq!(params.daily_sales, 10.0);
        assert_eq!(params.lead_time, 7.0);
        assert!((params.demand_std_dev() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn lead_time_multiplier_does_not_scale_lead_time_std_dev() {
        let sku = test_sku("A");
        let scenario = WhatIfScenario {
            lead_time_multiplier: 2.0,
            ..WhatIfScenario::IDENTITY
        };
        let params = AdjustedParams::new(&sku, &scenario);
        assert_eq!(params.lead_time, 14.0);
        assert_eq!(params.lead_time_std_dev, 2.0);
    }

    #[test]
    fn multipliers_compose_with_fields() {
        let sku = test_sku("A");
        let scenario = WhatIfScenario {
            inventory_multiplier: 0.5,
            demand_multiplier: 1.5,
            lead_time_multiplier: 1.0,
            variability_multiplier: 2.0,
        };
        let params = AdjustedParams::new(&sku, &scenario);
        assert_eq!(params.initial_inventory, 50.0);
        assert_eq!(params.daily_sales, 15.0);
        assert_eq!(params.variability_percent, 40.0);
        assert!((params.demand_std_dev() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn scenario_validation_rejects_non_positive_multipliers() {
        let scenario = WhatIfScenario {
            demand_multiplier: 0.0,
            ..WhatIfScenario::IDENTITY
        };
        assert!(scenario.validate().is_err());
        assert!(WhatIfScenario::IDENTITY.validate().is_ok());
        assert!(WhatIfScenario::IDENTITY.is_identity());
    }

    #[test]
    fn sku_validation_flags_zero_sales_rate() {
        let mut sku = test_sku("A");
        assert!(sku.validate().is_ok());
        sku.daily_sales_rate = 0.0;
        assert!(matches!(sku.validate(), Err(RiskError::InvalidInput(_))));
        sku.daily_sales_rate = f64::NAN;
        assert!(sku.validate().is_err());
    }
}
