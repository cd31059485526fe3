// src/analysis/book.rs

use crate::analysis::batch::analyze_portfolio;
use crate::analysis::policy::RiskPolicy;
use crate::error::{RiskError, RiskResult};
use crate::model::results::{DashboardMetrics, RiskAnalysis};
use crate::model::sku::{Sku, WhatIfScenario};
use crate::simulation::cancel::CancelToken;
use crate::simulation::config::SimulationConfig;
use std::collections::{HashMap, HashSet};

/// The caller's working set: SKUs plus the analyses cached for them.
///
/// Any change to a SKU drops its cached analysis and the portfolio metrics,
/// so nothing stale is ever served.
#[derive(Debug, Default)]
pub struct InventoryBook {
    skus: Vec<Sku>,
    analyses: HashMap<String, RiskAnalysis>,
    metrics: Option<DashboardMetrics>,
}

impl InventoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skus(skus: Vec<Sku>) -> RiskResult<Self> {
        let mut book = Self::new();
        book.replace_skus(skus)?;
        Ok(book)
    }

    pub fn skus(&self) -> &[Sku] {
        &self.skus
    }

    pub fn analysis(&self, sku_id: &str) -> Option<&RiskAnalysis> {
        self.analyses.get(sku_id)
    }

    pub fn metrics(&self) -> Option<&DashboardMetrics> {
        self.metrics.as_ref()
    }

    /// Swaps in a new SKU set and clears every cached result.
    pub fn replace_skus(&mut self, skus: Vec<Sku>) -> RiskResult<()> {
        let mut seen = HashSet::with_capacity(skus.len());
        for sku in &skus {
            if !seen.insert(sku.id.as_str()) {
                return Err(duplicate(&sku.id));
            }
        }
        self.skus = skus;
        self.analyses.clear();
        self.metrics = None;
        Ok(())
    }

    pub fn add_sku(&mut self, sku: Sku) -> RiskResult<()> {
        if self.position(&sku.id).is_some() {
            return Err(duplicate(&sku.id));
        }
        self.skus.push(sku);
        self.metrics = None;
        Ok(())
    }

    /// Applies `edit` to the SKU with `sku_id`. The id itself must not change.
    pub fn update_sku<F>(&mut self, sku_id: &str, edit: F) -> RiskResult<()>
    where
        F: FnOnce(&mut Sku),
    {
        let index = self
            .position(sku_id)
            .ok_or_else(|| RiskError::InvalidInput(format!("unknown SKU '{}'", sku_id)))?;
        let mut updated = self.skus[index].clone();
        edit(&mut updated);
        if updated.id != sku_id {
            return Err(RiskError::InvalidInput(format!(
                "SKU '{}' cannot be renamed to '{}' in place",
                sku_id, updated.id
            )));
        }
        self.skus[index] = updated;
        self.analyses.remove(sku_id);
        self.metrics = None;
        Ok(())
    }

    pub fn remove_sku(&mut self, sku_id: &str) -> Option<Sku> {
        let index = self.position(sku_id)?;
        self.analyses.remove(sku_id);
        self.metrics = None;
        Some(self.skus.remove(index))
    }

    /// Re-analyses the whole book. On failure the previous cache is kept.
    pub fn run_analysis(
        &mut self,
        config: &SimulationConfig,
        policy: &RiskPolicy,
        cancel: &CancelToken,
    ) -> RiskResult<&DashboardMetrics> {
        let report =
            analyze_portfolio(&self.skus, &WhatIfScenario::IDENTITY, config, policy, cancel)?;
        self.analyses = report
            .analyses
            .into_iter()
            .map(|analysis| (analysis.sku_id.clone(), analysis))
            .collect();
        Ok(&*self.metrics.insert(report.metrics))
    }

    fn position(&self, sku_id: &str) -> Option<usize> {
        self.skus.iter().position(|s| s.id == sku_id)
    }
}

fn duplicate(sku_id: &str) -> RiskError {
    RiskError::InvalidInput(format!("duplicate SKU id '{}'", sku_id))
}
