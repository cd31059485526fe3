// src/io/reporting.rs

use crate::analysis::risk::risk_level;
use crate::error::RiskResult;
use crate::model::results::{RiskAnalysis, RiskLevel};
use crate::model::sku::Sku;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// One forecast day of one SKU, flattened for CSV.
#[derive(Debug, Serialize)]
struct ForecastRow<'a> {
    sku_id: &'a str,
    day: u32,
    inventory_level: u64,
    demand: u64,
    stockout: bool,
    overstock: bool,
}

/// Headline figures for one SKU, flattened for CSV.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    sku_id: &'a str,
    name: &'a str,
    understock_risk: u32,
    overstock_risk: u32,
    dead_inventory_risk: u32,
    risk_level: RiskLevel,
    days_of_supply: u64,
    projected_stockout: Option<u32>,
    safety_stock: u64,
    current_reorder_point: f64,
    optimal_reorder_point: u64,
}

/// Writes every analysis' day-by-day forecast as CSV rows.
pub fn write_forecast<W: Write>(writer: W, analyses: &[RiskAnalysis]) -> RiskResult<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0;
    for analysis in analyses {
        for result in &analysis.simulation_results {
            wtr.serialize(ForecastRow {
                sku_id: &analysis.sku_id,
                day: result.day,
                inventory_level: result.inventory_level,
                demand: result.demand,
                stockout: result.stockout,
                overstock: result.overstock,
            })?;
            rows += 1;
        }
    }
    wtr.flush()?;
    Ok(rows)
}

/// Writes one summary row per SKU. `analyses[i]` belongs to `skus[i]`.
pub fn write_risk_summary<W: Write>(
    writer: W,
    skus: &[Sku],
    analyses: &[RiskAnalysis],
) -> RiskResult<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0;
    for (sku, analysis) in skus.iter().zip(analyses) {
        wtr.serialize(SummaryRow {
            sku_id: &analysis.sku_id,
            name: &sku.name,
            understock_risk: analysis.understock_risk,
            overstock_risk: analysis.overstock_risk,
            dead_inventory_risk: analysis.dead_inventory_risk,
            risk_level: risk_level(analysis.peak_risk()),
            days_of_supply: analysis.days_of_supply,
            projected_stockout: analysis.projected_stockout,
            safety_stock: analysis.safety_stock,
            current_reorder_point: sku.reorder_point,
            optimal_reorder_point: analysis.optimal_reorder_point,
        })?;
        rows += 1;
    }
    wtr.flush()?;
    Ok(rows)
}

/// File-backed [`write_forecast`].
pub fn write_forecast_file<P: AsRef<Path>>(path: P, analyses: &[RiskAnalysis]) -> RiskResult<()> {
    let file = std::fs::File::create(path.as_ref())?;
    let rows = write_forecast(file, analyses)?;
    info!(rows, path = %path.as_ref().display(), "forecast exported");
    Ok(())
}

/// File-backed [`write_risk_summary`].
pub fn write_risk_summary_file<P: AsRef<Path>>(
    path: P,
    skus: &[Sku],
    analyses: &[RiskAnalysis],
) -> RiskResult<()> {
    let file = std::fs::File::create(path.as_ref())?;
    let rows = write_risk_summary(file, skus, analyses)?;
    info!(rows, path = %path.as_ref().display(), "risk summary exported");
    Ok(())
}
