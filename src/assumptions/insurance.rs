//! Borrower-insurance pricing for loan-financed SCPI positions

use serde::{Deserialize, Serialize};

/// Age-bucketed borrower-insurance rate table
///
/// Lenders price the mandatory death/disability cover by age bracket, so the
/// table is a step function over the borrower's age at subscription. Rates
/// are annual percentages of the initial loan amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceRateTable {
    /// (max age inclusive, annual rate %) brackets, ordered by age
    brackets: Vec<(u8, f64)>,
    /// Rate beyond the last bracket
    above: f64,
}

impl InsuranceRateTable {
    /// Create from explicit brackets
    pub fn new(brackets: Vec<(u8, f64)>, above: f64) -> Self {
        Self { brackets, above }
    }

    /// Standard lender grid: 0.15% up to 35, 0.30% to 45, 0.50% to 50, 0.70% beyond
    pub fn standard_borrower() -> Self {
        Self {
            brackets: vec![(35, 0.15), (45, 0.30), (50, 0.50)],
            above: 0.70,
        }
    }

    /// Annual insurance rate (%) for a borrower of the given age
    pub fn rate_for_age(&self, age: u8) -> f64 {
        for &(max_age, rate) in &self.brackets {
            if age <= max_age {
                return rate;
            }
        }
        self.above
    }
}
