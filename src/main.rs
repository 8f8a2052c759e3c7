//! Patrimoine Simulator CLI
//!
//! Runs a savings strategy over a horizon and prints the monthly trajectory

use anyhow::Context;
use clap::Parser;
use patrimoine_sim::{MarketAssumptions, ProjectionEngine, Strategy};
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "patrimoine_sim", about = "Multi-envelope savings projection")]
struct Cli {
    /// Projection horizon in years
    #[arg(long, default_value_t = 25)]
    years: u32,

    /// Strategy configuration file (JSON); defaults to the reference strategy
    #[arg(long)]
    strategy: Option<PathBuf>,

    /// Write the monthly chart series to this CSV file
    #[arg(long)]
    chart_csv: Option<PathBuf>,

    /// Write the full aggregated results to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let strategy: Strategy = match &cli.strategy {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("parsing strategy file {}", path.display()))?
        }
        None => Strategy::default_strategy(),
    };

    let engine = ProjectionEngine::new(MarketAssumptions::default_market());
    let results = engine.aggregate(&strategy, cli.years)?;

    println!("Patrimoine Simulator v0.1.0");
    println!("===========================\n");

    println!("Envelopes ({} enabled, {} years):", results.sims.len(), cli.years);
    for entry in &results.sims {
        let sim = entry.result.sim();
        println!(
            "  {:<14} invested {:>12.2}  final {:>12.2}  net gains {:>12.2}",
            entry.label, sim.total_invested, sim.capital, sim.net_gains
        );
    }
    println!();

    println!(
        "{:>5} {:>14} {:>14} {:>14} {:>14}",
        "Month", "Total", "Invested", "Interest", "Livret"
    );
    println!("{}", "-".repeat(66));
    for point in results.chart.iter().take(24) {
        println!(
            "{:>5} {:>14.0} {:>14.0} {:>14.0} {:>14.0}",
            point.month, point.total, point.capital_invested, point.interest_generated, point.livret
        );
    }
    if results.chart.len() > 24 {
        println!("... ({} more months)", results.chart.len() - 24);
    }

    println!("\nSummary:");
    println!("  Total Invested: {:.2}", results.total_invested);
    println!("  Total Final: {:.2}", results.total_final);
    println!("  Total Net Gains: {:.2}", results.total_net);
    println!("  PER Tax Savings: {:.2}", results.per_savings);
    println!("  Blended Rate: {:.2}%", results.blended_return.overall_rate);
    if let Some(phases) = &results.blended_return.credit_phases {
        println!(
            "  Credit Phases: {:.2}% during loan, {:.2}% after",
            phases.during_credit, phases.after_credit
        );
    }
    println!("  Passive Income: {:.2}/month", results.passive_income);
    println!("  Monthly Effort: {:.2}/month", results.monthly_effort);
    println!(
        "  Livret Baseline: {:.2} (gains {:.2})",
        results.livret.capital, results.livret.gains
    );

    if let Some(path) = &cli.chart_csv {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        for point in &results.chart {
            writer.serialize(point)?;
        }
        writer.flush()?;
        println!("\nChart series written to: {}", path.display());
    }

    if let Some(path) = &cli.json {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, &results)?;
        println!("Full results written to: {}", path.display());
    }

    Ok(())
}
