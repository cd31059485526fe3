// src/model/results.rs

use serde::Serialize;
use std::fmt;

/// Aggregated state of one forecast day across all Monte Carlo runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// 1-indexed.
    pub day: u32,
    pub inventory_level: u64,
    pub demand: u64,
    pub stockout: bool,
    pub overstock: bool,
}

/// Risk picture for a single SKU under a single scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub sku_id: String,
    pub overstock_risk: u32,
    pub understock_risk: u32,
    pub dead_inventory_risk: u32,
    pub days_of_supply: u64,
    pub projected_stockout: Option<u32>,
    pub safety_stock: u64,
    pub optimal_reorder_point: u64,
    pub simulation_results: Vec<SimulationResult>,
}

impl RiskAnalysis {
    /// Largest of the three risk scores.
    pub fn peak_risk(&self) -> u32 {
        self.understock_risk
            .max(self.overstock_risk)
            .max(self.dead_inventory_risk)
    }
}

/// Portfolio-wide summary. A pure function of the SKUs and their analyses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    #[serde(rename = "totalSKUs")]
    pub total_skus: usize,
    #[serde(rename = "atRiskSKUs")]
    pub at_risk_skus: usize,
    #[serde(rename = "healthySKUs")]
    pub healthy_skus: usize,
    pub average_overstock_risk: u32,
    pub average_understock_risk: u32,
    pub average_dead_inventory_risk: u32,
    pub total_inventory_value: u64,
    pub projected_losses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        f.write_str(label)
    }
}
