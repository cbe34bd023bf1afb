//! Error types for the grid engine

use thiserror::Error;

/// Errors reported by the engine's checked operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Frame is {frame_width}x{frame_height}, engine is {width}x{height}")]
    DimensionMismatch {
        frame_width: usize,
        frame_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Malformed grid frame: {0}")]
    MalformedFrame(String),

    #[error("Unknown pattern '{0}'")]
    UnknownPattern(String),
}
