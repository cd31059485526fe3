use clap::Parser;
use inventory_risk::analysis::batch::analyze_portfolio;
use inventory_risk::analysis::risk::{explain, risk_level};
use inventory_risk::io::{import, reporting, sample};
use inventory_risk::logging;
use inventory_risk::simulation::config::{DEFAULT_FORECAST_DAYS, DEFAULT_NUM_SIMULATIONS};
use inventory_risk::{CancelToken, RiskPolicy, RiskResult, SimulationConfig, WhatIfScenario};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "inventory-risk",
    about = "Forecast stockout, overstock and dead-inventory risk with Monte Carlo simulation"
)]
struct Cli {
    /// SKU CSV file. A generated sample portfolio is used when omitted.
    skus: Option<PathBuf>,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_NUM_SIMULATIONS)]
    runs: usize,

    #[arg(long, default_value_t = DEFAULT_FORECAST_DAYS)]
    days: usize,

    /// Directory for the exported CSV files.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Abandon the batch after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Number of SKUs in the generated sample portfolio.
    #[arg(long, default_value_t = 12)]
    sample_size: usize,

    #[arg(long, default_value_t = 1.0)]
    inventory_multiplier: f64,

    #[arg(long, default_value_t = 1.0)]
    demand_multiplier: f64,

    #[arg(long, default_value_t = 1.0)]
    lead_time_multiplier: f64,

    #[arg(long, default_value_t = 1.0)]
    variability_multiplier: f64,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    logging::init_with_default(&cli.log_level);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> RiskResult<()> {
    println!("=== Inventory Risk Forecast ===");

    // 1. LOAD SKUS
    let skus = match &cli.skus {
        Some(path) => import::read_skus_from_path(path)?,
        None => {
            let seed = cli.seed.unwrap_or(42);
            println!("No SKU file given; generating {} sample SKUs.", cli.sample_size);
            sample::generate_sample_skus(cli.sample_size, seed)
        }
    };

    // 2. CONFIGURE
    let config = SimulationConfig {
        num_simulations: cli.runs,
        forecast_days: cli.days,
        seed: cli.seed,
        ..SimulationConfig::default()
    };
    let scenario = WhatIfScenario {
        inventory_multiplier: cli.inventory_multiplier,
        demand_multiplier: cli.demand_multiplier,
        lead_time_multiplier: cli.lead_time_multiplier,
        variability_multiplier: cli.variability_multiplier,
    };
    let policy = RiskPolicy::default();
    let cancel = match cli.timeout_secs {
        Some(secs) => CancelToken::with_timeout(Duration::from_secs(secs)),
        None => CancelToken::new(),
    };

    // 3. RUN
    println!(
        "Simulating {} SKUs ({} runs x {} days)...",
        skus.len(),
        config.num_simulations,
        config.forecast_days
    );
    let report = analyze_portfolio(&skus, &scenario, &config, &policy, &cancel)?;

    // 4. EXPORT
    std::fs::create_dir_all(&cli.out)?;
    reporting::write_forecast_file(cli.out.join("simulation_results.csv"), &report.analyses)?;
    reporting::write_risk_summary_file(
        cli.out.join("risk_analysis.csv"),
        &skus,
        &report.analyses,
    )?;

    // 5. DASHBOARD
    let m = &report.metrics;
    println!("\n=== Portfolio ===");
    println!("SKUs: {} ({} at risk, {} healthy)", m.total_skus, m.at_risk_skus, m.healthy_skus);
    println!(
        "Average risk: understock {}%, overstock {}%, dead inventory {}%",
        m.average_understock_risk, m.average_overstock_risk, m.average_dead_inventory_risk
    );
    println!("Inventory value: ${}", m.total_inventory_value);
    println!("Projected losses: ${}", m.projected_losses);

    println!("\n=== SKUs ===");
    for (sku, analysis) in skus.iter().zip(&report.analyses) {
        println!(
            "{} {:<26} [{}] under {:>3}% over {:>3}% dead {:>3}% | {}",
            sku.id,
            sku.name,
            risk_level(analysis.peak_risk()),
            analysis.understock_risk,
            analysis.overstock_risk,
            analysis.dead_inventory_risk,
            explain(analysis, sku, &policy)
        );
    }

    println!("\nSimulation Complete.");
    Ok(())
}
