//! Core types, errors, config, tracing, and constants for the Overrun
//! deadline-overrun estimator.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::{SimulationConfig, UniformRange};
pub use errors::ConfigError;
