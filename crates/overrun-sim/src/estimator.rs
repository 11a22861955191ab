//! Monte Carlo estimation of the deadline-overrun probability.
//!
//! Draws paired duration samples for two independent tasks, sums them
//! elementwise, and reduces the summed sample to the empirical
//! probability of exceeding the deadline.

use overrun_core::config::{SimulationConfig, UniformRange};
use overrun_core::errors::ConfigError;
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{DurationSummary, EstimateOutcome};

/// Monte Carlo estimator for the probability that two summed task
/// durations exceed a deadline.
#[derive(Debug)]
pub struct SamplingEstimator {
    config: SimulationConfig,
    /// Random seed for reproducibility (None = OS entropy).
    seed: Option<u64>,
}

impl SamplingEstimator {
    /// Create an estimator for a validated configuration.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, seed: None })
    }

    /// Set a deterministic seed for reproducible results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the simulation: sample both tasks, sum, and reduce.
    ///
    /// Cannot fail for a validated configuration. Each run draws fresh
    /// samples and leaves no state behind, so runs are independent;
    /// two runs agree only when seeded identically.
    pub fn run(&self) -> EstimateOutcome {
        let sims = self.config.sims as usize;
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let task_a = draw_samples(&self.config.task_a, sims, &mut rng);
        let task_b = draw_samples(&self.config.task_b, sims, &mut rng);
        let durations: Vec<f64> = task_a
            .iter()
            .zip(task_b.iter())
            .map(|(a, b)| a + b)
            .collect();

        let exceedance = exceedance_probability(&durations, self.config.deadline);
        let std_error = (exceedance * (1.0 - exceedance) / sims as f64).sqrt();
        tracing::debug!(sims, exceedance, std_error, "sampling complete");

        EstimateOutcome {
            exceedance,
            std_error,
            summary: DurationSummary::from_samples(&durations),
            sims: self.config.sims,
            seed: self.seed,
            deadline: self.config.deadline,
            durations,
        }
    }
}

/// Draw `count` samples uniformly from `[range.low, range.high)`.
///
/// The range must already be validated; `Uniform::new` panics on an
/// inverted or non-finite range.
fn draw_samples(range: &UniformRange, count: usize, rng: &mut impl Rng) -> Vec<f64> {
    let dist = Uniform::new(range.low, range.high);
    rng.sample_iter(dist).take(count).collect()
}

/// Fraction of durations strictly above the deadline.
///
/// Non-increasing in `deadline` for a fixed sample. An empty sample has
/// no mass anywhere, so it yields 0.0.
pub fn exceedance_probability(durations: &[f64], deadline: f64) -> f64 {
    if durations.is_empty() {
        return 0.0;
    }
    let over = durations.iter().filter(|&&d| d > deadline).count();
    over as f64 / durations.len() as f64
}
