//! Toroidal Game of Life
//!
//! A fixed-size Game of Life engine whose grid wraps at every edge, exposed
//! as a small set of operations for an external renderer to drive.

pub mod config;
pub mod engine;
pub mod error;
pub mod interop;
pub mod utils;

pub use config::Settings;
pub use engine::{GridEngine, Pattern};
pub use error::EngineError;

use anyhow::Result;

/// Seed an engine from `settings` and advance it the configured number of generations
pub fn simulate(settings: &Settings) -> Result<GridEngine> {
    settings.validate()?;
    let mut engine = settings.seeded_engine()?;
    for _ in 0..settings.simulation.generations {
        engine.advance_generation();
    }
    Ok(engine)
}
