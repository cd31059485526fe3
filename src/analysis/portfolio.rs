// src/analysis/portfolio.rs

use crate::analysis::policy::RiskPolicy;
use crate::error::{RiskError, RiskResult};
use crate::model::results::{DashboardMetrics, RiskAnalysis};
use crate::model::sku::Sku;

/// Rolls per-SKU analyses up into dashboard metrics.
///
/// `analyses[i]` must be the analysis of `skus[i]`. An empty portfolio or a
/// misaligned pair of lists is an error rather than a set of NaN averages.
pub fn aggregate_metrics(
    skus: &[Sku],
    analyses: &[RiskAnalysis],
    policy: &RiskPolicy,
) -> RiskResult<DashboardMetrics> {
    check_alignment(skus, analyses)?;

    let total = skus.len();
    let at_risk = analyses
        .iter()
        .filter(|a| a.peak_risk() > policy.at_risk_threshold)
        .count();

    let mean = |score: fn(&RiskAnalysis) -> u32| -> u32 {
        let sum: u64 = analyses.iter().map(|a| score(a) as u64).sum();
        (sum as f64 / total as f64).round() as u32
    };

    let total_inventory_value: f64 = skus.iter().map(Sku::inventory_value).sum();
    let projected_losses: f64 = skus
        .iter()
        .zip(analyses)
        .map(|(sku, analysis)| projected_loss(sku, analysis, policy))
        .sum();

    Ok(DashboardMetrics {
        total_skus: total,
        at_risk_skus: at_risk,
        healthy_skus: total - at_risk,
        average_overstock_risk: mean(|a| a.overstock_risk),
        average_understock_risk: mean(|a| a.understock_risk),
        average_dead_inventory_risk: mean(|a| a.dead_inventory_risk),
        total_inventory_value: round_money(total_inventory_value),
        projected_losses: round_money(projected_losses),
    })
}

/// Expected markdown plus write-off value for one SKU.
pub fn projected_loss(sku: &Sku, analysis: &RiskAnalysis, policy: &RiskPolicy) -> f64 {
    let value = sku.inventory_value();
    let overstock = analysis.overstock_risk as f64 / 100.0 * value * policy.overstock_loss_rate;
    let dead = analysis.dead_inventory_risk as f64 / 100.0 * value * policy.dead_stock_loss_rate;
    overstock + dead
}

fn check_alignment(skus: &[Sku], analyses: &[RiskAnalysis]) -> RiskResult<()> {
    if skus.is_empty() {
        return Err(RiskError::EmptyPortfolio);
    }
    if skus.len() != analyses.len() {
        return Err(RiskError::MismatchedCollections {
            skus: skus.len(),
            analyses: analyses.len(),
        });
    }
    for (index, (sku, analysis)) in skus.iter().zip(analyses).enumerate() {
        if sku.id != analysis.sku_id {
            return Err(RiskError::MisalignedAnalysis {
                index,
                sku_id: sku.id.clone(),
                analysis_id: analysis.sku_id.clone(),
            });
        }
    }
    Ok(())
}

fn round_money(value: f64) -> u64 {
    if value.is_nan() || value < 0.0 {
        0
    } else {
        value.round() as u64
    }
}
