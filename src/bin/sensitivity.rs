//! Migration-fraction sensitivity sweep
//!
//! Runs the assessment at 10%, 20%, ... 100% migration and writes one CSV row
//! of headline metrics per fraction. Supports JSON output via --json.
//! Accepts the cost profile via environment variables:
//!   INFRA_COST, COMPUTE_COST, STORAGE_COST, LICENSING_COST, HEADCOUNT, SALARY
//!   DISCOUNT_RATE, ANALYSIS_YEARS, IMPLEMENTATION_COST, BENCHMARKS_PATH
//! Unset variables fall back to the reference enterprise profile below.

use std::env;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use migration_value::benchmarks::{Benchmarks, DEFAULT_BENCHMARKS_PATH};
use migration_value::profile::{AssessmentParams, CostProfile};
use migration_value::scenario::{default_sweep_fractions, ScenarioRunner};

#[derive(Serialize)]
struct SweepRow {
    migration_fraction: f64,
    total_annual_savings: f64,
    proposed_annual_tco: f64,
    proposed_total_tco: f64,
    npv: f64,
    irr: Option<f64>,
    roi_percentage: f64,
    payback_period_years: f64,
    function_to_cost_ratio: f64,
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw.parse().with_context(|| format!("parsing {}={}", key, raw)),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let json_output = env::args().any(|a| a == "--json");

    let profile = CostProfile {
        infrastructure_cost: env_or("INFRA_COST", 25_000_000.0)?,
        compute_cost: env_or("COMPUTE_COST", 45_000_000.0)?,
        storage_cost: env_or("STORAGE_COST", 15_000_000.0)?,
        licensing_cost: env_or("LICENSING_COST", 12_000_000.0)?,
        headcount: env_or("HEADCOUNT", 300)?,
        average_salary: env_or("SALARY", 180_000.0)?,
    };
    let defaults = AssessmentParams::default();
    let base = AssessmentParams {
        discount_rate: env_or("DISCOUNT_RATE", defaults.discount_rate)?,
        analysis_years: env_or("ANALYSIS_YEARS", defaults.analysis_years)?,
        implementation_cost: env_or("IMPLEMENTATION_COST", 5_000_000.0)?,
        ..defaults
    };
    let benchmarks_path = env::var("BENCHMARKS_PATH").unwrap_or_else(|_| DEFAULT_BENCHMARKS_PATH.to_string());

    let runner = ScenarioRunner::with_benchmarks(Benchmarks::load_or_default(Path::new(&benchmarks_path)));
    let results = runner.sweep_migration(&profile, &base, &default_sweep_fractions())?;
    info!("swept {} migration fractions", results.len());

    let rows: Vec<SweepRow> = results
        .iter()
        .map(|(fraction, r)| SweepRow {
            migration_fraction: *fraction,
            total_annual_savings: r.total_annual_savings,
            proposed_annual_tco: r.proposed_annual_tco,
            proposed_total_tco: r.proposed_total_tco,
            npv: r.npv,
            irr: r.irr,
            roi_percentage: r.roi_percentage,
            payback_period_years: r.payback_period_years,
            function_to_cost_ratio: r.function_to_cost_ratio,
        })
        .collect();

    if json_output {
        println!("{}", serde_json::to_string(&rows)?);
        return Ok(());
    }

    let output_path = "migration_sensitivity.csv";
    let mut writer = csv::Writer::from_path(output_path).with_context(|| format!("creating {}", output_path))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("{:>9} {:>16} {:>16} {:>10} {:>10}", "Fraction", "AnnualSavings", "NPV", "ROI%", "Payback");
    for row in &rows {
        println!(
            "{:>8.0}% {:>16.0} {:>16.0} {:>10.1} {:>10.2}",
            row.migration_fraction * 100.0,
            row.total_annual_savings,
            row.npv,
            row.roi_percentage,
            row.payback_period_years
        );
    }
    println!("\nOutput written to {}", output_path);

    Ok(())
}
