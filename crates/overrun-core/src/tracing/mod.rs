//! Tracing setup for the Overrun estimator.

mod setup;

pub use setup::init_tracing;
