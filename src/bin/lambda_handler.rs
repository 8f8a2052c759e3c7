//! AWS Lambda handler for running strategy aggregations
//!
//! Accepts a strategy and horizon as JSON and returns the aggregated results.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use patrimoine_sim::{AggregatedResults, MarketAssumptions, ProjectionEngine, Strategy};
use serde::{Deserialize, Serialize};

/// Input configuration for the aggregation
#[derive(Debug, Deserialize)]
struct SimulationRequest {
    /// Projection horizon in years (default: 25)
    #[serde(default = "default_years")]
    years: u32,

    /// Strategy to project (default: reference strategy)
    #[serde(default = "Strategy::default_strategy")]
    strategy: Strategy,
}

fn default_years() -> u32 {
    25
}

/// Output from the aggregation
#[derive(Debug, Serialize)]
struct SimulationResponse {
    years: u32,
    results: AggregatedResults,
    execution_time_ms: u64,
}

/// Lambda handler function
async fn handler(event: LambdaEvent<SimulationRequest>) -> Result<SimulationResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    let engine = ProjectionEngine::new(MarketAssumptions::default_market());
    let results = engine.aggregate(&request.strategy, request.years)?;

    Ok(SimulationResponse {
        years: request.years,
        results,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
