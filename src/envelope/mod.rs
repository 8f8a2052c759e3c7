//! Envelope configuration value objects

mod config;

pub use config::{ConfigError, EnvelopeConfig, EnvelopeKind, ScpiCreditConfig, Strategy};

pub(crate) use config::{check_amount, check_rate};
