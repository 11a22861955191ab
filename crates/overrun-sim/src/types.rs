//! Estimator result types: run outcomes and duration summaries.

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Distribution, Max, Min, OrderStatistics};

/// Descriptive statistics of a duration sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DurationSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// 10th percentile (optimistic).
    pub p10: f64,
    /// 50th percentile (median).
    pub p50: f64,
    /// 90th percentile (pessimistic).
    pub p90: f64,
}

impl DurationSummary {
    /// Compute summary statistics over a duration sample.
    ///
    /// The estimator always hands this a non-empty sample; an empty one
    /// yields NaN fields rather than a panic.
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut data = Data::new(samples.to_vec());
        Self {
            mean: data.mean().unwrap_or(f64::NAN),
            std_dev: data.std_dev().unwrap_or(f64::NAN),
            min: data.min(),
            max: data.max(),
            p10: data.percentile(10),
            p50: data.percentile(50),
            p90: data.percentile(90),
        }
    }

    /// Validate the ordering invariant: min <= p10 <= p50 <= p90 <= max.
    pub fn is_valid(&self) -> bool {
        self.min <= self.p10
            && self.p10 <= self.p50
            && self.p50 <= self.p90
            && self.p90 <= self.max
    }
}

/// Complete result of one estimation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateOutcome {
    /// Summed task durations, one per simulation. Excluded from
    /// serialized reports; a million-element array is not a report.
    #[serde(skip)]
    pub durations: Vec<f64>,
    /// Empirical probability that the total duration exceeds the deadline.
    pub exceedance: f64,
    /// Standard error of the estimate: sqrt(p * (1 - p) / sims).
    pub std_error: f64,
    /// Descriptive statistics of the summed durations.
    pub summary: DurationSummary,
    /// Number of paired samples the run drew.
    pub sims: u64,
    /// Seed the run was drawn with, when seeded.
    pub seed: Option<u64>,
    /// Deadline the durations were compared against.
    pub deadline: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_orders_percentiles() {
        let samples: Vec<f64> = (0..1000).map(|i| i as f64 / 10.0).collect();
        let summary = DurationSummary::from_samples(&samples);
        assert!(summary.is_valid());
        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 99.9);
        assert!((summary.mean - 49.95).abs() < 1e-9);
        assert!(summary.p10 < summary.p50 && summary.p50 < summary.p90);
    }

    #[test]
    fn summary_of_constant_sample() {
        let summary = DurationSummary::from_samples(&[4.0; 100]);
        assert!(summary.is_valid());
        assert_eq!(summary.mean, 4.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.p50, 4.0);
    }

    #[test]
    fn outcome_serializes_without_durations() {
        let outcome = EstimateOutcome {
            durations: vec![1.0, 2.0, 3.0],
            exceedance: 0.5,
            std_error: 0.05,
            summary: DurationSummary::from_samples(&[1.0, 2.0, 3.0]),
            sims: 3,
            seed: Some(42),
            deadline: 2.0,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(!json.contains("durations"));
        assert!(json.contains("\"exceedance\":0.5"));
        assert!(json.contains("\"seed\":42"));
    }
}
