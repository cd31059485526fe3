//! Monte Carlo inventory risk forecasting.
//!
//! A SKU's stock, demand statistics and reorder policy go in; stockout,
//! overstock and dead-inventory risk scores plus safety-stock and
//! reorder-point recommendations come out.
//!
//! ```no_run
//! use inventory_risk::{analyze_risk, Sku, WhatIfScenario};
//!
//! let sku = Sku {
//!     id: "SKU-0001".into(),
//!     name: "Widget".into(),
//!     current_inventory: 20.0,
//!     daily_sales_rate: 10.0,
//!     sales_variability: 20.0,
//!     lead_time_days: 7.0,
//!     lead_time_variability: 2.0,
//!     reorder_point: 50.0,
//!     reorder_quantity: 100.0,
//!     unit_cost: 12.0,
//!     holding_cost_percent: 18.0,
//! };
//! let analysis = analyze_risk(&sku, &WhatIfScenario::IDENTITY);
//! println!("understock risk: {}%", analysis.understock_risk);
//! ```

pub mod analysis;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use analysis::batch::{analyze_portfolio, BatchHandle, PortfolioReport};
pub use analysis::book::InventoryBook;
pub use analysis::compare::{compare_scenario, ScenarioComparison};
pub use analysis::policy::RiskPolicy;
pub use analysis::portfolio::aggregate_metrics;
pub use analysis::risk::{analyze_risk, analyze_risk_with, explain, risk_level};
pub use error::{RiskError, RiskResult};
pub use model::results::{DashboardMetrics, RiskAnalysis, RiskLevel, SimulationResult};
pub use model::sku::{Sku, WhatIfScenario};
pub use simulation::cancel::CancelToken;
pub use simulation::config::SimulationConfig;
pub use simulation::monte_carlo::{simulate, simulate_with_rng};
