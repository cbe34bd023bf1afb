//! Toroidal Game of Life engine

pub mod grid;
pub mod grid_engine;
pub mod patterns;
pub mod rules;

pub use grid::{Grid, ALIVE, DEAD, HEIGHT, WIDTH};
pub use grid_engine::GridEngine;
pub use patterns::Pattern;
pub use rules::LifeRules;
