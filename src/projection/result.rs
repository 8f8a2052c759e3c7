//! Projection result structures

use serde::{Deserialize, Serialize};

/// Result of projecting one simple envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimResult {
    /// Capital per month, index 0 = month 0 (`years*12 + 1` points)
    pub data_points: Vec<f64>,

    /// Capital at the horizon
    pub capital: f64,

    /// Raw capital injected, fees not deducted
    pub total_invested: f64,

    /// capital + distributed dividends - total invested
    pub gross_gains: f64,

    /// Gains after envelope-specific taxation
    pub net_gains: f64,

    /// PER entry-tax rebate on contributions (0 for other kinds)
    pub per_tax_savings: f64,

    /// Dividends paid out instead of compounded (SCPI without reinvestment)
    pub distributed_dividends: f64,
}

/// Result of projecting the loan-financed SCPI envelope
///
/// The monthly series is net of outstanding debt while the scalar `capital`
/// reports the gross final share value: the chart shows the investor's net
/// position, the summary shows the asset they end up holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScpiCreditResult {
    /// Core projection; `total_invested` holds the real out-of-pocket cash
    #[serde(flatten)]
    pub sim: SimResult,

    /// Monthly loan payment, borrower insurance included
    pub monthly_payment: f64,

    /// Monthly SCPI distribution on the net shares
    pub monthly_dividend: f64,

    /// Insurance part of the monthly payment
    pub monthly_insurance: f64,

    /// Annual insurance rate (%) applied to the initial loan
    pub insurance_rate: f64,

    /// monthly_dividend - monthly_payment (negative = investor tops up)
    pub cashflow: f64,

    /// Interest + insurance paid over the life of the loan
    pub total_loan_cost: f64,

    /// Share value acquired after entry fees
    pub net_shares: f64,
}

/// Result of the reference livret projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivretResult {
    /// Pooled capital per month, index 0 = month 0
    pub data_points: Vec<f64>,

    /// Pooled capital at the horizon
    pub capital: f64,

    /// Pooled injections over the horizon
    pub total_invested: f64,

    /// capital - total_invested
    pub gains: f64,
}
