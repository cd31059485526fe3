// src/analysis/batch.rs

use crate::analysis::policy::RiskPolicy;
use crate::analysis::portfolio::aggregate_metrics;
use crate::analysis::risk::analyze_risk_cancellable;
use crate::error::{RiskError, RiskResult};
use crate::model::results::{DashboardMetrics, RiskAnalysis};
use crate::model::sku::{Sku, WhatIfScenario};
use crate::simulation::cancel::CancelToken;
use crate::simulation::config::SimulationConfig;
use serde::Serialize;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{info, warn};

/// A complete portfolio run. Only ever built when every SKU finished.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    /// Same order as the input SKUs.
    pub analyses: Vec<RiskAnalysis>,
    pub metrics: DashboardMetrics,
}

/// Analyses every SKU, then aggregates.
///
/// The token is checked between SKUs and between Monte Carlo runs. On
/// cancellation or deadline the whole batch is discarded.
///
/// With a seeded config, SKU `i` uses `seed + i` so SKUs do not share random
/// streams.
pub fn analyze_portfolio(
    skus: &[Sku],
    scenario: &WhatIfScenario,
    config: &SimulationConfig,
    policy: &RiskPolicy,
    cancel: &CancelToken,
) -> RiskResult<PortfolioReport> {
    validate_batch(config, scenario)?;
    if skus.is_empty() {
        return Err(RiskError::EmptyPortfolio);
    }

    let started = Instant::now();
    let analyses = skus
        .iter()
        .enumerate()
        .map(|(index, sku)| {
            cancel.check()?;
            let sku_config = SimulationConfig {
                seed: config.seed.map(|seed| seed.wrapping_add(index as u64)),
                ..config.clone()
            };
            analyze_risk_cancellable(sku, scenario, &sku_config, policy, cancel)
        })
        .collect::<RiskResult<Vec<_>>>()
        .map_err(|err| {
            warn!(error = %err, "portfolio batch abandoned");
            err
        })?;

    let metrics = aggregate_metrics(skus, &analyses, policy)?;
    info!(
        skus = skus.len(),
        at_risk = metrics.at_risk_skus,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "portfolio analysed"
    );
    Ok(PortfolioReport { analyses, metrics })
}

/// Rejects configurations that cannot produce a usable report.
pub fn validate_batch(config: &SimulationConfig, scenario: &WhatIfScenario) -> RiskResult<()> {
    if config.num_simulations == 0 {
        return Err(RiskError::InvalidInput(
            "num_simulations must be at least 1".to_string(),
        ));
    }
    if config.forecast_days == 0 {
        return Err(RiskError::InvalidInput(
            "forecast_days must be at least 1".to_string(),
        ));
    }
    scenario.validate()
}

/// A portfolio batch running on its own thread.
pub struct BatchHandle {
    cancel: CancelToken,
    handle: JoinHandle<RiskResult<PortfolioReport>>,
}

impl BatchHandle {
    /// Starts [`analyze_portfolio`] off the calling thread.
    pub fn spawn(
        skus: Vec<Sku>,
        scenario: WhatIfScenario,
        config: SimulationConfig,
        policy: RiskPolicy,
        cancel: CancelToken,
    ) -> Self {
        let worker_cancel = cancel.clone();
        let handle = thread::spawn(move || {
            analyze_portfolio(&skus, &scenario, &config, &policy, &worker_cancel)
        });
        Self { cancel, handle }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the batch ends.
    pub fn join(self) -> RiskResult<PortfolioReport> {
        self.handle.join().map_err(|_| RiskError::WorkerPanicked)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sku::test_sku;
    use std::time::Duration;

    fn quick_config() -> SimulationConfig {
        SimulationConfig {
            num_simulations: 50,
            forecast_days: 20,
            ..SimulationConfig::seeded(8)
        }
    }

    #[test]
    fn report_keeps_input_order() {
        let skus = vec![test_sku("A"), test_sku("B"), test_sku("C")];
        let report = analyze_portfolio(
            &skus,
            &WhatIfScenario::IDENTITY,
            &quick_config(),
            &RiskPolicy::default(),
            &CancelToken::new(),
        )
        .unwrap();
        let ids: Vec<&str> = report.analyses.iter().map(|a| a.sku_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(report.metrics.total_skus, 3);
    }

    #[test]
    fn zero_runs_are_rejected_up_front() {
        let config = SimulationConfig {
            num_simulations: 0,
            ..quick_config()
        };
        let err = analyze_portfolio(
            &[test_sku("A")],
            &WhatIfScenario::IDENTITY,
            &config,
            &RiskPolicy::default(),
            &CancelToken::new(),
        )
        .unwrap_err();
        assert!(matches!(err, RiskError::InvalidInput(_)));
    }

    #[test]
    fn empty_portfolio_is_rejected() {
        let err = analyze_portfolio(
            &[],
            &WhatIfScenario::IDENTITY,
            &quick_config(),
            &RiskPolicy::default(),
            &CancelToken::new(),
        )
        .unwrap_err();
        assert!(matches!(err, RiskError::EmptyPortfolio));
    }

    #[test]
    fn expired_deadline_yields_no_report() {
        let err = analyze_portfolio(
            &[test_sku("A")],
            &WhatIfScenario::IDENTITY,
            &quick_config(),
            &RiskPolicy::default(),
            &CancelToken::with_timeout(Duration::ZERO),
        )
        .unwrap_err();
        assert!(matches!(err, RiskError::DeadlineExceeded));
    }

    #[test]
    fn background_batch_can_be_cancelled() {
        let skus: Vec<Sku> = (0..50).map(|i| test_sku(&format!("SKU-{i}"))).collect();
        let handle = BatchHandle::spawn(
            skus,
            WhatIfScenario::IDENTITY,
            SimulationConfig::seeded(1),
            RiskPolicy::default(),
            CancelToken::new(),
        );
        handle.cancel();
        assert!(matches!(handle.join(), Err(RiskError::Cancelled)));
    }

    #[test]
    fn background_batch_completes() {
        let handle = BatchHandle::spawn(
            vec![test_sku("A")],
            WhatIfScenario::IDENTITY,
            quick_config(),
            RiskPolicy::default(),
            CancelToken::new(),
        );
        let report = handle.join().unwrap();
        assert_eq!(report.analyses.len(), 1);
    }
}
