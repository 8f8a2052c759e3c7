//! Reference livret projector: one pooled low-yield account
//!
//! Answers "what if the same cash effort had gone to a plain savings
//! account". Flows from every active envelope are pooled into a single
//! balance before compounding, so pooling is linear by construction.

use super::result::LivretResult;
use super::ProjectionEngine;
use crate::envelope::{check_amount, check_rate, ConfigError};
use serde::{Deserialize, Serialize};

/// Cash flows one envelope would redirect to the reference account
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SavingsFlow {
    pub initial_capital: f64,
    pub monthly_contribution: f64,
}

impl ProjectionEngine {
    /// Compound the pooled flows at the given annual rate (%)
    pub fn project_livret(
        &self,
        flows: &[SavingsFlow],
        years: u32,
        annual_rate_pct: f64,
    ) -> Result<LivretResult, ConfigError> {
        if years == 0 {
            return Err(ConfigError::InvalidHorizon);
        }
        check_rate("annual_rate_pct", annual_rate_pct)?;
        for flow in flows {
            check_amount("initial_capital", flow.initial_capital)?;
            check_amount("monthly_contribution", flow.monthly_contribution)?;
        }

        let months = years * 12;
        let total_initial: f64 = flows.iter().map(|f| f.initial_capital).sum();
        let total_monthly: f64 = flows.iter().map(|f| f.monthly_contribution).sum();
        let monthly_rate = annual_rate_pct / 100.0 / 12.0;

        let mut capital = total_initial;
        let mut data_points = Vec::with_capacity(months as usize + 1);
        data_points.push(capital);
        for _month in 1..=months {
            capital += total_monthly;
            capital += capital * monthly_rate;
            data_points.push(capital);
        }

        let total_invested = total_initial + total_monthly * months as f64;
        Ok(LivretResult {
            data_points,
            capital,
            total_invested,
            gains: capital - total_invested,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::MarketAssumptions;
    use approx::assert_relative_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::new(MarketAssumptions::default_market())
    }

    fn flow(initial: f64, monthly: f64) -> SavingsFlow {
        SavingsFlow {
            initial_capital: initial,
            monthly_contribution: monthly,
        }
    }

    #[test]
    fn test_capital_grows_at_positive_rate() {
        let result = engine()
            .project_livret(&[flow(10_000.0, 0.0)], 5, 3.0)
            .unwrap();
        assert!(result.capital > 10_000.0);
    }

    #[test]
    fn test_total_invested() {
        let result = engine()
            .project_livret(&[flow(5_000.0, 100.0)], 3, 3.0)
            .unwrap();
        assert_eq!(result.total_invested, 5_000.0 + 100.0 * 36.0);
    }

    #[test]
    fn test_gains_identity() {
        let result = engine()
            .project_livret(&[flow(10_000.0, 50.0)], 5, 3.0)
            .unwrap();
        assert_relative_eq!(
            result.gains,
            result.capital - result.total_invested,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_rate_zero_gains() {
        let result = engine()
            .project_livret(&[flow(10_000.0, 100.0)], 5, 0.0)
            .unwrap();
        assert_eq!(result.gains, 0.0);
    }

    #[test]
    fn test_pooling_is_linear() {
        let single = engine()
            .project_livret(&[flow(20_000.0, 100.0)], 5, 3.0)
            .unwrap();
        let split = engine()
            .project_livret(&[flow(10_000.0, 60.0), flow(10_000.0, 40.0)], 5, 3.0)
            .unwrap();

        assert_eq!(single.capital, split.capital);
    }

    #[test]
    fn test_data_points_length() {
        let result = engine()
            .project_livret(&[flow(1_000.0, 0.0)], 5, 1.0)
            .unwrap();
        assert_eq!(result.data_points.len(), 5 * 12 + 1);
    }

    #[test]
    fn test_empty_pool() {
        let result = engine().project_livret(&[], 5, 1.0).unwrap();
        assert_eq!(result.capital, 0.0);
        assert_eq!(result.total_invested, 0.0);
        assert_eq!(result.gains, 0.0);
        assert_eq!(result.data_points.len(), 61);
    }

    #[test]
    fn test_negative_flow_rejected() {
        assert!(engine()
            .project_livret(&[flow(-100.0, 0.0)], 5, 1.0)
            .is_err());
    }
}
