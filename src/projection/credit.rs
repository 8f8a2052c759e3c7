//! Projector for the loan-financed SCPI envelope

use super::loan::LoanSchedule;
use super::result::{ScpiCreditResult, SimResult};
use super::ProjectionEngine;
use crate::envelope::{ConfigError, ScpiCreditConfig};

impl ProjectionEngine {
    /// Project the leveraged SCPI position over the horizon
    ///
    /// The monthly series tracks share value net of outstanding debt, negative
    /// at the start when entry fees eat into the financed position. The final
    /// `capital` reports the gross share value; `total_invested` reports the
    /// investor's real out-of-pocket cash (down payment plus the monthly
    /// shortfall between loan payment and distributed yield).
    pub fn project_scpi_credit(
        &self,
        config: &ScpiCreditConfig,
        years: u32,
    ) -> Result<ScpiCreditResult, ConfigError> {
        if years == 0 {
            return Err(ConfigError::InvalidHorizon);
        }
        config.validate()?;

        let months = years * 12;
        let loan_months = config.loan_years * 12;
        let total_investment = config.loan_amount + config.down_payment;
        let net_shares = total_investment * (1.0 - config.entry_fees / 100.0);
        let monthly_revaluation = self.market().scpi_revaluation / 100.0 / 12.0;

        let insurance_rate = self.market().insurance.rate_for_age(config.borrower_age);
        let monthly_insurance = config.loan_amount * insurance_rate / 100.0 / 12.0;
        let mut schedule =
            LoanSchedule::new(config.loan_amount, config.interest_rate, config.loan_years);
        let monthly_payment = schedule.payment() + monthly_insurance;

        let mut shares_value = net_shares;
        let mut data_points = Vec::with_capacity(months as usize + 1);
        for month in 0..=months {
            data_points.push(shares_value - schedule.remaining_debt());
            if month < months {
                shares_value *= 1.0 + monthly_revaluation;
                schedule.amortize_month();
            }
        }

        let monthly_dividend = net_shares * config.rate / 100.0 / 12.0;
        let cashflow = monthly_dividend - monthly_payment;
        let total_loan_cost = monthly_payment * loan_months as f64 - config.loan_amount;
        let total_out_of_pocket =
            config.down_payment + (-cashflow).max(0.0) * loan_months.min(months) as f64;

        let capital = shares_value;
        let gross_gains = capital - total_out_of_pocket;

        Ok(ScpiCreditResult {
            sim: SimResult {
                data_points,
                capital,
                total_invested: total_out_of_pocket,
                gross_gains,
                net_gains: gross_gains,
                per_tax_savings: 0.0,
                distributed_dividends: 0.0,
            },
            monthly_payment,
            monthly_dividend,
            monthly_insurance,
            insurance_rate,
            cashflow,
            total_loan_cost,
            net_shares,
        })
    }
}
