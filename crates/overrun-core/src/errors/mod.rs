//! Error types for the Overrun estimator.

mod config_error;

pub use config_error::ConfigError;
