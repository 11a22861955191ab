//! Simulation configuration.

mod sim_config;

pub use sim_config::{SimulationConfig, UniformRange};
