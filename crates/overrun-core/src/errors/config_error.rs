//! Configuration errors.

/// Errors that can occur during simulation configuration validation.
///
/// All variants are raised synchronously at construction time; a
/// validated configuration cannot fail later in the run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("sample count must be at least 1, got {sims}")]
    InvalidSampleCount { sims: u64 },

    #[error("invalid duration range for {task}: low {low} must be strictly below high {high}")]
    InvalidRange { task: &'static str, low: f64, high: f64 },

    #[error("non-finite value for {field}: {value}")]
    NonFiniteValue { field: &'static str, value: f64 },
}
