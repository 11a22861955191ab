//! Run parameters for the deadline-overrun estimator.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Support of one task's duration: a continuous uniform range over
/// `[low, high)`, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformRange {
    pub low: f64,
    pub high: f64,
}

impl UniformRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Width of the range. Meaningful only for a validated range.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Configuration for one estimation run.
///
/// Plain data; [`SimulationConfig::validate`] enforces the invariants
/// before any sampling happens. Defaults reproduce the two-report
/// scenario: task A takes 1-5 hours, task B takes 2-6 hours, and the
/// deadline is 9 hours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of paired duration samples to draw.
    pub sims: u64,
    /// Duration range for task A.
    pub task_a: UniformRange,
    /// Duration range for task B.
    pub task_b: UniformRange,
    /// Completion deadline the summed durations are compared against.
    pub deadline: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sims: constants::DEFAULT_SIMS,
            task_a: UniformRange::new(constants::DEFAULT_TASK_A_LOW, constants::DEFAULT_TASK_A_HIGH),
            task_b: UniformRange::new(constants::DEFAULT_TASK_B_LOW, constants::DEFAULT_TASK_B_HIGH),
            deadline: constants::DEFAULT_DEADLINE,
        }
    }
}

impl SimulationConfig {
    /// Validate the run parameters.
    ///
    /// Requires `sims >= 1`, finite range bounds with `low < high` for
    /// both tasks, and a finite deadline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sims == 0 {
            return Err(ConfigError::InvalidSampleCount { sims: self.sims });
        }
        validate_range("task_a", &self.task_a)?;
        validate_range("task_b", &self.task_b)?;
        if !self.deadline.is_finite() {
            return Err(ConfigError::NonFiniteValue {
                field: "deadline",
                value: self.deadline,
            });
        }
        Ok(())
    }

    /// Smallest possible summed duration under this configuration.
    pub fn min_total(&self) -> f64 {
        self.task_a.low + self.task_b.low
    }

    /// Largest possible summed duration under this configuration.
    pub fn max_total(&self) -> f64 {
        self.task_a.high + self.task_b.high
    }
}

fn validate_range(task: &'static str, range: &UniformRange) -> Result<(), ConfigError> {
    if !range.low.is_finite() {
        return Err(ConfigError::NonFiniteValue {
            field: task,
            value: range.low,
        });
    }
    if !range.high.is_finite() {
        return Err(ConfigError::NonFiniteValue {
            field: task,
            value: range.high,
        });
    }
    if range.low >= range.high {
        return Err(ConfigError::InvalidRange {
            task,
            low: range.low,
            high: range.high,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sims, 1_000_000);
        assert_eq!(config.min_total(), 3.0);
        assert_eq!(config.max_total(), 11.0);
    }

    #[test]
    fn zero_sims_rejected() {
        let config = SimulationConfig {
            sims: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSampleCount { sims: 0 })
        ));
    }

    #[test]
    fn inverted_range_rejected() {
        let config = SimulationConfig {
            task_a: UniformRange::new(5.0, 1.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { task: "task_a", .. })
        ));
    }

    #[test]
    fn empty_range_rejected() {
        // low == high is a zero-width support, not a distribution
        let config = SimulationConfig {
            task_b: UniformRange::new(2.0, 2.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { task: "task_b", .. })
        ));
    }

    #[test]
    fn non_finite_bounds_rejected() {
        let config = SimulationConfig {
            task_a: UniformRange::new(f64::NEG_INFINITY, 5.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteValue { field: "task_a", .. })
        ));

        let config = SimulationConfig {
            deadline: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteValue { field: "deadline", .. })
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SimulationConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sims, config.sims);
        assert_eq!(back.task_a, config.task_a);
        assert_eq!(back.deadline, config.deadline);
    }
}
