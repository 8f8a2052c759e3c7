//! Projection engine for savings envelopes

mod credit;
mod envelope;
mod livret;
mod loan;
mod rate;
mod result;

pub use livret::SavingsFlow;
pub use loan::{monthly_loan_payment, LoanSchedule};
pub use rate::annual_money_weighted_rate;
pub use result::{LivretResult, ScpiCreditResult, SimResult};

use crate::assumptions::MarketAssumptions;

/// Projection engine carrying the market assumptions shared by every run
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    market: MarketAssumptions,
}

impl ProjectionEngine {
    /// Create an engine with the given market assumptions
    pub fn new(market: MarketAssumptions) -> Self {
        Self { market }
    }

    /// Market assumptions used by this engine
    pub fn market(&self) -> &MarketAssumptions {
        &self.market
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(MarketAssumptions::default_market())
    }
}
