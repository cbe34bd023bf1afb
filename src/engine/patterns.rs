//! Built-in seed patterns

use super::grid::ALIVE;
use super::GridEngine;
use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

/// Compiled-in patterns the driver can place on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Block,
    Blinker,
    Beacon,
    Glider,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [Pattern::Block, Pattern::Blinker, Pattern::Beacon, Pattern::Glider];

    /// Live cells as `(x, y)` offsets from the pattern's top-left corner
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Pattern::Beacon => &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
            Pattern::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Block => "block",
            Pattern::Blinker => "blinker",
            Pattern::Beacon => "beacon",
            Pattern::Glider => "glider",
        }
    }

    /// Parse a seed name where `none` means an empty grid
    pub fn parse_seed(name: &str) -> Result<Option<Pattern>, EngineError> {
        if name.trim().eq_ignore_ascii_case("none") {
            Ok(None)
        } else {
            name.parse().map(Some)
        }
    }

    /// Mark the pattern's cells alive with its corner at `(x, y)`.
    ///
    /// Placement wraps like the grid itself, for any offset. Cells already
    /// alive stay alive.
    pub fn stamp(self, engine: &mut GridEngine, x: usize, y: usize) {
        let (width, height) = engine.dimensions();
        let (x, y) = (x % width, y % height);
        let cells = engine.raw_buffer_view();
        for &(dx, dy) in self.cells() {
            let (cx, cy) = ((x + dx) % width, (y + dy) % height);
            cells[cy * width + cx] = ALIVE;
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownPattern(s.to_string()))
    }
}
