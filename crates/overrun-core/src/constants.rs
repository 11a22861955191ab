//! Shared constants for the Overrun estimator.

/// Overrun version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of paired duration samples per run.
pub const DEFAULT_SIMS: u64 = 1_000_000;

/// Default duration bounds for task A, in hours.
pub const DEFAULT_TASK_A_LOW: f64 = 1.0;
pub const DEFAULT_TASK_A_HIGH: f64 = 5.0;

/// Default duration bounds for task B, in hours.
pub const DEFAULT_TASK_B_LOW: f64 = 2.0;
pub const DEFAULT_TASK_B_HIGH: f64 = 6.0;

/// Default completion deadline, in hours.
pub const DEFAULT_DEADLINE: f64 = 9.0;

/// Default number of histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;
