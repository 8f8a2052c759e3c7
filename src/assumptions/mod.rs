//! Market assumptions shared by every projection

mod insurance;

pub use insurance::InsuranceRateTable;

use serde::{Deserialize, Serialize};

/// Reference entry fees (%) charged by insurance wrappers (AV/PER)
pub const WRAPPER_ENTRY_FEES: f64 = 4.0;

/// Reference annual management fees (%) of insurance wrappers
pub const WRAPPER_MGMT_FEES: f64 = 1.0;

/// Container for all market-level assumptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAssumptions {
    /// Annual SCPI share revaluation (%), applied monthly on top of the
    /// distributed yield
    pub scpi_revaluation: f64,

    /// Annual rate (%) of the reference livret account
    pub livret_rate: f64,

    /// Borrower-insurance pricing grid
    pub insurance: InsuranceRateTable,
}

impl MarketAssumptions {
    /// Assumptions matching the current market reference values
    pub fn default_market() -> Self {
        Self {
            scpi_revaluation: 1.0,
            livret_rate: 1.0,
            insurance: InsuranceRateTable::standard_borrower(),
        }
    }
}
