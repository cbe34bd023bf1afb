//! Configuration management for the simulation driver

pub mod settings;

pub use settings::{CliOverrides, OutputConfig, OutputFormat, SeedConfig, Settings, SimulationConfig};
