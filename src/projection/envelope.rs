//! Month-by-month projector for the simple envelope kinds

use super::result::SimResult;
use super::ProjectionEngine;
use crate::envelope::{ConfigError, EnvelopeConfig, EnvelopeKind};

impl ProjectionEngine {
    /// Project one simple envelope over the horizon
    ///
    /// The returned series has one point per month, index 0 being the
    /// entry-fee-adjusted initial capital. Each month the net contribution is
    /// added, then yield, management fees and share revaluation are applied
    /// according to the envelope kind.
    pub fn project_envelope(
        &self,
        config: &EnvelopeConfig,
        kind: EnvelopeKind,
        years: u32,
    ) -> Result<SimResult, ConfigError> {
        if years == 0 {
            return Err(ConfigError::InvalidHorizon);
        }
        config.validate()?;

        let months = years * 12;
        let entry_factor = 1.0 - config.entry_fees / 100.0;
        let monthly_rate = config.rate / 100.0 / 12.0;
        let monthly_mgmt = if kind.is_wrapper() {
            config.mgmt_fees / 100.0 / 12.0
        } else {
            0.0
        };
        let monthly_revaluation = if kind == EnvelopeKind::Scpi {
            self.market().scpi_revaluation / 100.0 / 12.0
        } else {
            0.0
        };

        let mut capital = config.initial_capital * entry_factor;
        let mut total_invested = config.initial_capital;
        let mut distributed_dividends = 0.0;
        let mut data_points = Vec::with_capacity(months as usize + 1);
        data_points.push(capital);

        for month in 1..=months {
            capital += config.monthly_contribution * entry_factor;
            total_invested += config.monthly_contribution;

            // Jouissance: freshly delivered shares earn nothing yet
            if kind == EnvelopeKind::Scpi && month <= config.jouissance_months {
                data_points.push(capital);
                continue;
            }

            let gains = capital * monthly_rate;
            if kind == EnvelopeKind::Scpi && !config.reinvest_dividends {
                // Distributed dividends accumulate outside the envelope
                distributed_dividends += gains;
            } else {
                capital += gains;
            }

            if kind.is_wrapper() {
                capital *= 1.0 - monthly_mgmt;
            }
            if kind == EnvelopeKind::Scpi {
                // Share revaluation applies whatever the dividend policy
                capital *= 1.0 + monthly_revaluation;
            }

            data_points.push(capital);
        }

        let gross_gains = capital + distributed_dividends - total_invested;
        let net_gains = match kind {
            EnvelopeKind::AssuranceVie => gross_gains * (1.0 - config.social_charges / 100.0),
            _ => gross_gains,
        };
        let per_tax_savings = match kind {
            EnvelopeKind::Per => total_invested * config.tmi / 100.0,
            _ => 0.0,
        };

        Ok(SimResult {
            data_points,
            capital,
            total_invested,
            gross_gains,
            net_gains,
            per_tax_savings,
            distributed_dividends,
        })
    }
}
