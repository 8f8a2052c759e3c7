//! Envelope configurations supplied by the caller
//!
//! All amounts are euros and all rates are percentages (5.5 means 5.5%/year),
//! exactly as entered by the investor. The engine never mutates these values
//! and holds no defaults of its own; the `default_*` constructors mirror the
//! reference product sheets and exist for callers (CLI, lambda, tests).

use crate::assumptions::{WRAPPER_ENTRY_FEES, WRAPPER_MGMT_FEES};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a configuration or horizon
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("horizon must be at least 1 year")]
    InvalidHorizon,

    #[error("{field} must be a non-negative amount (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} must lie within 0-100% (got {value})")]
    RateOutOfRange { field: &'static str, value: f64 },

    #[error("loan duration must be at least 1 year")]
    InvalidLoanTerm,
}

pub(crate) fn check_amount(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::NegativeAmount { field, value });
    }
    Ok(())
}

pub(crate) fn check_rate(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ConfigError::RateOutOfRange { field, value });
    }
    Ok(())
}

/// Kind of simple envelope, driving the projector's fee and tax rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeKind {
    /// SCPI shares bought cash
    Scpi,
    /// Assurance vie (flexible insurance wrapper)
    AssuranceVie,
    /// Plan d'épargne retraite (retirement wrapper)
    Per,
}

impl EnvelopeKind {
    /// Wrappers carry monthly management fees; SCPI carries share
    /// revaluation and the jouissance grace period instead
    pub fn is_wrapper(&self) -> bool {
        matches!(self, EnvelopeKind::AssuranceVie | EnvelopeKind::Per)
    }
}

/// Configuration of one simple envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// Whether this envelope participates in aggregation
    pub enabled: bool,

    /// Capital injected at month 0
    pub initial_capital: f64,

    /// Capital injected every month
    pub monthly_contribution: f64,

    /// Gross annual yield (%)
    pub rate: f64,

    /// SCPI only: compound monthly dividends into capital, or set them aside
    /// as distributed income
    pub reinvest_dividends: bool,

    /// Entry fees (%) deducted from every injection before it compounds
    pub entry_fees: f64,

    /// Annual management fees (%), applied monthly, wrappers only
    pub mgmt_fees: f64,

    /// SCPI only: initial months during which injected capital earns no yield
    pub jouissance_months: u32,

    /// Social charges (%) on gross gains at withdrawal, assurance vie only
    pub social_charges: f64,

    /// Investor's marginal tax bracket (%), PER only
    pub tmi: f64,
}

impl EnvelopeConfig {
    /// Check amounts and percentage ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_amount("initial_capital", self.initial_capital)?;
        check_amount("monthly_contribution", self.monthly_contribution)?;
        check_rate("rate", self.rate)?;
        check_rate("entry_fees", self.entry_fees)?;
        check_rate("mgmt_fees", self.mgmt_fees)?;
        check_rate("social_charges", self.social_charges)?;
        check_rate("tmi", self.tmi)?;
        Ok(())
    }

    /// Reference SCPI bought cash
    pub fn default_scpi() -> Self {
        Self {
            enabled: true,
            initial_capital: 10_000.0,
            monthly_contribution: 200.0,
            rate: 5.5,
            reinvest_dividends: true,
            entry_fees: 8.0,
            mgmt_fees: 0.0,
            jouissance_months: 3,
            social_charges: 0.0,
            tmi: 30.0,
        }
    }

    /// Reference assurance vie contract
    pub fn default_assurance_vie() -> Self {
        Self {
            enabled: true,
            initial_capital: 10_000.0,
            monthly_contribution: 200.0,
            rate: 4.0,
            reinvest_dividends: false,
            entry_fees: WRAPPER_ENTRY_FEES,
            mgmt_fees: WRAPPER_MGMT_FEES,
            jouissance_months: 0,
            social_charges: 17.2,
            tmi: 30.0,
        }
    }

    /// Reference PER contract
    pub fn default_per() -> Self {
        Self {
            enabled: true,
            initial_capital: 5_000.0,
            monthly_contribution: 150.0,
            rate: 4.0,
            reinvest_dividends: false,
            entry_fees: WRAPPER_ENTRY_FEES,
            mgmt_fees: WRAPPER_MGMT_FEES,
            jouissance_months: 0,
            social_charges: 0.0,
            tmi: 30.0,
        }
    }
}

/// Configuration of the loan-financed SCPI envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScpiCreditConfig {
    /// Whether this envelope participates in aggregation
    pub enabled: bool,

    /// Amount borrowed
    pub loan_amount: f64,

    /// Cash paid upfront alongside the loan
    pub down_payment: f64,

    /// Annual loan interest rate (%)
    pub interest_rate: f64,

    /// Loan duration in years
    pub loan_years: u32,

    /// Gross annual SCPI yield (%)
    pub rate: f64,

    /// Entry fees (%) deducted once on the full leveraged position
    pub entry_fees: f64,

    /// Borrower age at subscription, drives the insurance rate
    pub borrower_age: u8,
}

impl ScpiCreditConfig {
    /// Check amounts, percentage ranges and the loan term
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_amount("loan_amount", self.loan_amount)?;
        check_amount("down_payment", self.down_payment)?;
        check_rate("interest_rate", self.interest_rate)?;
        check_rate("rate", self.rate)?;
        check_rate("entry_fees", self.entry_fees)?;
        if self.loan_years == 0 {
            return Err(ConfigError::InvalidLoanTerm);
        }
        Ok(())
    }

    /// Reference credit-financed SCPI (disabled by default)
    pub fn default_credit() -> Self {
        Self {
            enabled: false,
            loan_amount: 100_000.0,
            down_payment: 0.0,
            interest_rate: 5.35,
            loan_years: 25,
            rate: 5.5,
            entry_fees: 8.0,
            borrower_age: 30,
        }
    }
}

/// The four envelopes of a savings strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    pub scpi: EnvelopeConfig,
    pub scpi_credit: ScpiCreditConfig,
    pub assurance_vie: EnvelopeConfig,
    pub per: EnvelopeConfig,
}

impl Strategy {
    /// Reference strategy mirroring the product sheets
    pub fn default_strategy() -> Self {
        Self {
            scpi: EnvelopeConfig::default_scpi(),
            scpi_credit: ScpiCreditConfig::default_credit(),
            assurance_vie: EnvelopeConfig::default_assurance_vie(),
            per: EnvelopeConfig::default_per(),
        }
    }

    /// Validate every enabled envelope
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scpi.enabled {
            self.scpi.validate()?;
        }
        if self.scpi_credit.enabled {
            self.scpi_credit.validate()?;
        }
        if self.assurance_vie.enabled {
            self.assurance_vie.validate()?;
        }
        if self.per.enabled {
            self.per.validate()?;
        }
        Ok(())
    }
}
