//! Sweep the reference strategy across projection horizons
//!
//! Projects every horizon in parallel and writes one CSV row per horizon for
//! frontier-style comparisons against the livret baseline.

use patrimoine_sim::{MarketAssumptions, ProjectionEngine, Strategy};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// One row of the sweep output
#[derive(Debug, Serialize)]
struct SweepRow {
    years: u32,
    total_invested: f64,
    total_final: f64,
    total_net: f64,
    livret_capital: f64,
    blended_rate: f64,
    passive_income: f64,
    monthly_effort: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    let engine = ProjectionEngine::new(MarketAssumptions::default_market());
    let mut strategy = Strategy::default_strategy();
    strategy.scpi_credit.enabled = true;

    println!("Sweeping horizons 1..=40...");
    let rows: Vec<SweepRow> = (1..=40u32)
        .into_par_iter()
        .map(|years| {
            let results = engine
                .aggregate(&strategy, years)
                .expect("reference strategy is valid");
            SweepRow {
                years,
                total_invested: results.total_invested,
                total_final: results.total_final,
                total_net: results.total_net,
                livret_capital: results.livret.capital,
                blended_rate: results.blended_return.overall_rate,
                passive_income: results.passive_income,
                monthly_effort: results.monthly_effort,
            }
        })
        .collect();

    let output_path = "horizon_sweep.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Swept {} horizons in {:?}", rows.len(), start.elapsed());
    println!("Results written to: {}", output_path);
    Ok(())
}
