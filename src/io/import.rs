// src/io/import.rs

use crate::error::RiskResult;
use crate::model::sku::Sku;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

// Fallbacks for absent or unusable numeric cells. All strictly positive so an
// imported record can always be simulated.
pub const DEFAULT_INVENTORY: f64 = 100.0;
pub const DEFAULT_DAILY_SALES: f64 = 10.0;
pub const DEFAULT_SALES_VARIABILITY: f64 = 20.0;
pub const DEFAULT_LEAD_TIME_DAYS: f64 = 7.0;
pub const DEFAULT_LEAD_TIME_VARIABILITY: f64 = 2.0;
pub const DEFAULT_REORDER_POINT: f64 = 50.0;
pub const DEFAULT_REORDER_QUANTITY: f64 = 100.0;
pub const DEFAULT_UNIT_COST: f64 = 25.0;
pub const DEFAULT_HOLDING_COST_PERCENT: f64 = 18.0;

/// Column positions resolved from a loosely named header row.
///
/// Headers are matched case-insensitively by keyword, so "Current Inventory",
/// "inventory_units" and "INVENTORY" all land in the same field.
#[derive(Debug, Default)]
struct ColumnMap {
    id: Option<usize>,
    name: Option<usize>,
    inventory: Option<usize>,
    sales: Option<usize>,
    sales_variability: Option<usize>,
    lead_time: Option<usize>,
    lead_time_variability: Option<usize>,
    reorder_point: Option<usize>,
    reorder_quantity: Option<usize>,
    unit_cost: Option<usize>,
    holding: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
        let find = |pred: fn(&str) -> bool| lowered.iter().position(|h| pred(h));

        Self {
            id: find(|h| h.contains("id")),
            name: find(|h| h.contains("name")),
            inventory: find(|h| h.contains("inventory") || h.contains("stock")),
            sales: find(|h| h.contains("sales") && !h.contains("variability")),
            sales_variability: find(|h| h.contains("variability") && !h.contains("lead")),
            lead_time: find(|h| h.contains("lead") && !h.contains("variability")),
            lead_time_variability: find(|h| h.contains("lead") && h.contains("variability")),
            reorder_point: find(|h| h.contains("reorder") && h.contains("point")),
            reorder_quantity: find(|h| {
                h.contains("reorder") && (h.contains("quantity") || h.contains("qty"))
            }),
            unit_cost: find(|h| (h.contains("cost") && !h.contains("holding")) || h.contains("price")),
            holding: find(|h| h.contains("holding")),
        }
    }
}

/// Parses SKU records from CSV text with a header row.
///
/// Missing ids become `SKU-0001`, `SKU-0002`, ... by row; missing names become
/// `Product N`. Numeric cells that are absent, unparsable or negative take the
/// field's default; sales rate, lead time and reorder quantity also replace
/// zero, since the simulator needs them positive.
pub fn read_skus<R: Read>(reader: R) -> RiskResult<Vec<Sku>> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(rdr.headers()?);
    let mut skus = Vec::new();

    for (index, record) in rdr.records().enumerate() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row = index + 1;
        let text = |column: Option<usize>| {
            column
                .and_then(|c| record.get(c))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        skus.push(Sku {
            id: text(columns.id).unwrap_or_else(|| format!("SKU-{:04}", row)),
            name: text(columns.name).unwrap_or_else(|| format!("Product {}", row)),
            current_inventory: non_negative(&record, columns.inventory, DEFAULT_INVENTORY),
            daily_sales_rate: positive(&record, columns.sales, DEFAULT_DAILY_SALES),
            sales_variability: non_negative(
                &record,
                columns.sales_variability,
                DEFAULT_SALES_VARIABILITY,
            ),
            lead_time_days: positive(&record, columns.lead_time, DEFAULT_LEAD_TIME_DAYS),
            lead_time_variability: non_negative(
                &record,
                columns.lead_time_variability,
                DEFAULT_LEAD_TIME_VARIABILITY,
            ),
            reorder_point: non_negative(&record, columns.reorder_point, DEFAULT_REORDER_POINT),
            reorder_quantity: positive(
                &record,
                columns.reorder_quantity,
                DEFAULT_REORDER_QUANTITY,
            ),
            unit_cost: non_negative(&record, columns.unit_cost, DEFAULT_UNIT_COST),
            holding_cost_percent: non_negative(
                &record,
                columns.holding,
                DEFAULT_HOLDING_COST_PERCENT,
            ),
        });
    }

    Ok(skus)
}

pub fn read_skus_from_path<P: AsRef<Path>>(path: P) -> RiskResult<Vec<Sku>> {
    let file = std::fs::File::open(path)?;
    read_skus(file)
}

fn number(record: &StringRecord, column: Option<usize>) -> Option<f64> {
    column
        .and_then(|c| record.get(c))
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

fn non_negative(record: &StringRecord, column: Option<usize>, default: f64) -> f64 {
    number(record, column)
        .filter(|value| *value >= 0.0)
        .unwrap_or(default)
}

fn positive(record: &StringRecord, column: Option<usize>, default: f64) -> f64 {
    number(record, column)
        .filter(|value| *value > 0.0)
        .unwrap_or(default)
}
