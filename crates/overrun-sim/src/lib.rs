//! Sampling engine for the Overrun estimator.
//!
//! Draws paired task durations from two uniform ranges, sums them
//! elementwise, and estimates the probability that the total blows past
//! the deadline. Histogram binning and the rendering seam live here
//! too; actual rendering belongs to the caller.

pub mod estimator;
pub mod histogram;
pub mod types;
pub mod visualizer;

pub use estimator::{exceedance_probability, SamplingEstimator};
pub use histogram::Histogram;
pub use types::{DurationSummary, EstimateOutcome};
pub use visualizer::{NullVisualizer, Visualizer};
