//! Patrimoine simulator - projection engine for multi-envelope savings strategies
//!
//! This library provides:
//! - Month-by-month projections for SCPI (cash and credit), assurance vie and PER envelopes
//! - Loan amortization and borrower-insurance modeling for the leveraged SCPI
//! - A pooled livret baseline for "value of investing" comparisons
//! - Strategy aggregation: chart series, totals, blended returns, passive income

pub mod aggregate;
pub mod assumptions;
pub mod envelope;
pub mod projection;

// Re-export commonly used types
pub use aggregate::{AggregatedResults, BlendedReturn, ChartPoint, EnvelopeId, SimEntry};
pub use assumptions::MarketAssumptions;
pub use envelope::{ConfigError, EnvelopeConfig, EnvelopeKind, ScpiCreditConfig, Strategy};
pub use projection::{LivretResult, ProjectionEngine, ScpiCreditResult, SimResult};
