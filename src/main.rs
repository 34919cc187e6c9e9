//! Migration Value CLI
//!
//! Command-line interface for running value assessments, discovery briefs
//! and benchmark derivation.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use migration_value::benchmarks::{Benchmarks, FilingMetrics, DEFAULT_BENCHMARKS_PATH};
use migration_value::discovery::{DiscoveryBrief, KeywordClassifier};
use migration_value::profile::{
    AssessmentParams, CostProfile, DEFAULT_ANALYSIS_YEARS, DEFAULT_DISCOUNT_RATE,
    DEFAULT_IMPLEMENTATION_COST, DEFAULT_MIGRATION_FRACTION,
};
use migration_value::readout::{format_currency, format_payback_months, render_readout, ReadoutContext};
use migration_value::valuation::{AssessmentResult, ValuationEngine};

/// Deterministic TCO / ROI / NPV / payback assessment for platform migrations
#[derive(Parser)]
#[command(name = "migration-value")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a value assessment for one cost profile
    Assess(AssessArgs),
    /// Build a discovery brief from a JSON map of named text facts
    Discover {
        /// JSON object of { "source name": "text", ... }
        #[arg(long)]
        facts: PathBuf,
        /// Primary use case named in follow-up questions
        #[arg(long, default_value = "the migrated")]
        use_case: String,
    },
    /// Derive benchmarks from filing metrics and print them as JSON
    Benchmarks {
        #[arg(long)]
        operating_margin: f64,
        #[arg(long, default_value_t = 0.0)]
        revenue_growth: f64,
    },
}

#[derive(Clone, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Current annual server and hardware cost
    #[arg(long)]
    infra_cost: f64,
    /// Current annual compute cost
    #[arg(long)]
    compute_cost: f64,
    /// Current annual storage cost
    #[arg(long)]
    storage_cost: f64,
    /// Current annual licensing cost
    #[arg(long)]
    licensing_cost: f64,
    /// Data team headcount
    #[arg(long)]
    headcount: u32,
    /// Average fully-loaded salary
    #[arg(long)]
    salary: f64,

    #[arg(long, default_value_t = DEFAULT_MIGRATION_FRACTION)]
    migration_fraction: f64,
    #[arg(long, default_value_t = DEFAULT_DISCOUNT_RATE)]
    discount_rate: f64,
    #[arg(long, default_value_t = DEFAULT_ANALYSIS_YEARS)]
    years: u32,
    #[arg(long, default_value_t = DEFAULT_IMPLEMENTATION_COST)]
    implementation_cost: f64,

    /// Benchmark JSON; falls back to defaults when missing or malformed
    #[arg(long, default_value = DEFAULT_BENCHMARKS_PATH)]
    benchmarks: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the per-year cash-flow schedule to this CSV file
    #[arg(long)]
    cashflows_csv: Option<PathBuf>,

    /// Company named in the readout
    #[arg(long, default_value = "Prospective Customer")]
    company: String,
    /// Workload named in the readout
    #[arg(long, default_value = "analytics")]
    use_case: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Assess(args) => assess(args),
        Commands::Discover { facts, use_case } => discover(facts, &use_case),
        Commands::Benchmarks {
            operating_margin,
            revenue_growth,
        } => {
            let metrics = FilingMetrics {
                operating_margin,
                revenue_growth,
            };
            let benchmarks = Benchmarks::from_filing_metrics(&metrics);
            println!("{}", serde_json::to_string_pretty(&benchmarks.to_file(Some(&metrics)))?);
            Ok(())
        }
    }
}

fn assess(args: AssessArgs) -> Result<()> {
    let benchmarks = Benchmarks::load_or_default(&args.benchmarks);
    info!("using benchmarks {:?}", benchmarks);

    let profile = CostProfile {
        infrastructure_cost: args.infra_cost,
        compute_cost: args.compute_cost,
        storage_cost: args.storage_cost,
        licensing_cost: args.licensing_cost,
        headcount: args.headcount,
        average_salary: args.salary,
    };
    let params = AssessmentParams {
        migration_fraction: args.migration_fraction,
        discount_rate: args.discount_rate,
        analysis_years: args.years,
        implementation_cost: args.implementation_cost,
    };

    let engine = ValuationEngine::new(benchmarks);
    let result = engine.run_assessment(&profile, &params)?;

    if let Some(path) = &args.cashflows_csv {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        for row in &result.cashflow_schedule {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!("cash-flow schedule written to {}", path.display());
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Markdown => {
            let ctx = ReadoutContext {
                company: args.company,
                use_case: args.use_case,
                migration_fraction: params.migration_fraction,
                prepared_on: chrono::Local::now().date_naive(),
            };
            print!("{}", render_readout(&ctx, &result));
        }
        OutputFormat::Text => print_text(&params, &result),
    }

    Ok(())
}

fn print_text(params: &AssessmentParams, result: &AssessmentResult) {
    let summary = result.summary();

    println!("Migration Value Assessment");
    println!("==========================\n");
    println!("  Migration fraction: {:.0}%", params.migration_fraction * 100.0);
    println!("  Horizon:            {} years", params.analysis_years);
    println!("  Discount rate:      {:.2}%", params.discount_rate * 100.0);
    println!();

    println!("{:<28} {:>18} {:>18}", "", "Annual", "Over horizon");
    println!("{}", "-".repeat(66));
    println!(
        "{:<28} {:>18} {:>18}",
        "Baseline TCO",
        format_currency(result.baseline_annual_tco),
        format_currency(result.baseline_total_tco)
    );
    println!(
        "{:<28} {:>18} {:>18}",
        "Proposed TCO",
        format_currency(result.proposed_annual_tco),
        format_currency(result.proposed_total_tco)
    );
    println!();

    println!("Savings by lever (annual):");
    println!("  Compute:      {}", format_currency(result.savings.compute));
    println!("  Storage:      {}", format_currency(result.savings.storage));
    println!("  Productivity: {}", format_currency(result.savings.productivity));
    println!("  Total:        {}", format_currency(result.total_annual_savings));
    println!();

    println!("{:>5} {:>16} {:>10} {:>16} {:>16}", "Year", "CashFlow", "DF", "PV", "CumPV");
    for row in &result.cashflow_schedule {
        println!(
            "{:>5} {:>16.2} {:>10.6} {:>16.2} {:>16.2}",
            row.year, row.cash_flow, row.discount_factor, row.present_value, row.cumulative_present_value
        );
    }
    println!();

    println!("Summary:");
    println!("  NPV:                   {}", format_currency(result.npv));
    match result.irr {
        Some(irr) => println!("  IRR:                   {:.2}%", irr * 100.0),
        None => println!("  IRR:                   n/a"),
    }
    println!("  ROI:                   {:.1}%", result.roi_percentage);
    println!("  Payback:               {} payback", format_payback_months(result.payback_period_years));
    println!("  Function-to-cost:      {:.2}x", result.function_to_cost_ratio);
    println!("  Total savings:         {}", format_currency(summary.total_savings));
    println!(
        "  Sizing:                ~{:.0} credits/yr, {:.0} TB/month ({})",
        result.infrastructure_sizing.estimated_annual_credits,
        result.infrastructure_sizing.estimated_storage_tb,
        result.infrastructure_sizing.edition
    );

    println!("\nValue buckets:");
    for bucket in result.value_buckets.iter() {
        match bucket.annual_value {
            Some(v) => println!("  {:<42} {}/yr", bucket.category.label(), format_currency(v)),
            None => println!("  {:<42} qualitative", bucket.category.label()),
        }
    }
}

fn discover(facts_path: PathBuf, use_case: &str) -> Result<()> {
    let file = File::open(&facts_path).with_context(|| format!("opening {}", facts_path.display()))?;
    let facts: BTreeMap<String, String> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", facts_path.display()))?;

    let brief = DiscoveryBrief::build(&KeywordClassifier, &facts, use_case);
    println!("{}", serde_json::to_string_pretty(&brief)?);
    Ok(())
}
