//! The grid engine: one live grid plus the operations a host drives it with

use super::grid::{Grid, DEAD};
use super::rules::LifeRules;
use crate::error::EngineError;
use log::{debug, trace};

/// Owns the live grid and a staging buffer for generation advance.
///
/// Not internally synchronized; a single thread of control is expected to
/// drive every operation.
#[derive(Debug, Clone)]
pub struct GridEngine {
    current: Grid,
    staging: Grid,
    generation: u64,
}

impl GridEngine {
    /// An all-dead engine with the default 80x60 grid
    pub fn new() -> Self {
        Self {
            current: Grid::default(),
            staging: Grid::default(),
            generation: 0,
        }
    }

    /// An all-dead engine with custom dimensions
    pub fn with_dimensions(width: usize, height: usize) -> Result<Self, EngineError> {
        let current = Grid::new(width, height)?;
        Ok(Self {
            staging: current.clone(),
            current,
            generation: 0,
        })
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.current.width, self.current.height)
    }

    pub fn width(&self) -> usize {
        self.current.width
    }

    pub fn height(&self) -> usize {
        self.current.height
    }

    /// Generations advanced since creation or the last `clear`
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Read-only view of the live row-major cell bytes
    pub fn buffer(&self) -> &[u8] {
        self.current.as_bytes()
    }

    /// Mutable view aliasing the live row-major cell bytes.
    ///
    /// Writes land directly in the grid and are seen by the next
    /// `advance_generation`. Any nonzero byte is a live cell that adds 1 to
    /// each neighbor's count; a C host that sums raw byte values and only
    /// treats `1` as alive will disagree on bytes other than 0 and 1.
    pub fn raw_buffer_view(&mut self) -> &mut [u8] {
        self.current.as_bytes_mut()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.current.fill(DEAD);
        self.generation = 0;
    }

    /// Flip the cell at column `x`, row `y`; out-of-range coordinates are ignored
    pub fn toggle_cell(&mut self, x: i64, y: i64) {
        if let Err(err) = self.try_toggle_cell(x, y) {
            trace!("Ignoring toggle: {}", err);
        }
    }

    /// Flip the cell at column `x`, row `y`, reporting out-of-range coordinates
    pub fn try_toggle_cell(&mut self, x: i64, y: i64) -> Result<(), EngineError> {
        let (col, row) = self.checked_position(x, y)?;
        debug!("Toggling cell at ({}, {})", x, y);
        self.current.toggle(row, col)
    }

    /// Cell byte at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.current.get(y, x)
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.current.is_alive(y, x)
    }

    /// Live neighbors of column `x`, row `y` on the torus
    pub fn count_neighbors(&self, x: usize, y: usize) -> Option<u8> {
        self.current
            .contains(y, x)
            .then(|| self.current.count_neighbors(y, x))
    }

    pub fn live_count(&self) -> usize {
        self.current.living_count()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Advance the simulation by exactly one generation.
    ///
    /// The next generation is computed into the staging grid from an
    /// untouched snapshot, then copied over the live grid. Copying keeps the
    /// live buffer at the same address across generations.
    pub fn advance_generation(&mut self) {
        LifeRules::evolve_into(&self.current, &mut self.staging);
        self.current
            .as_bytes_mut()
            .copy_from_slice(self.staging.as_bytes());
        self.generation += 1;
        trace!(
            "Generation {}: {} live cells",
            self.generation,
            self.current.living_count()
        );
    }

    fn checked_position(&self, x: i64, y: i64) -> Result<(usize, usize), EngineError> {
        let in_range = |value: i64, extent: usize| {
            usize::try_from(value).ok().filter(|&value| value < extent)
        };
        match (in_range(x, self.width()), in_range(y, self.height())) {
            (Some(col), Some(row)) => Ok((col, row)),
            _ => Err(self.current.out_of_bounds(x, y)),
        }
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::grid::{ALIVE, WIDTH};

    #[test]
    fn test_dimensions() {
        let engine = GridEngine::new();
        assert_eq!(engine.dimensions(), (80, 60));
        assert_eq!(engine.buffer().len(), 80 * 60);

        let custom = GridEngine::with_dimensions(12, 7).unwrap();
        assert_eq!(custom.dimensions(), (12, 7));
        assert!(GridEngine::with_dimensions(0, 7).is_err());
    }

    #[test]
    fn test_starts_dead() {
        let engine = GridEngine::new();
        assert!(engine.is_empty());
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_toggle_is_row_major() {
        let mut engine = GridEngine::new();
        engine.toggle_cell(3, 2);

        assert_eq!(engine.buffer()[2 * WIDTH + 3], ALIVE);
        assert_eq!(engine.get(3, 2), Some(ALIVE));
        assert_eq!(engine.live_count(), 1);

        engine.toggle_cell(3, 2);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut engine = GridEngine::new();
        engine.toggle_cell(5, 5);
        let before = engine.buffer().to_vec();

        for (x, y) in [(80, 0), (0, 60), (-1, 0), (0, -1), (i64::MAX, i64::MIN)] {
            engine.toggle_cell(x, y);
        }
        assert_eq!(engine.buffer(), before.as_slice());
    }

    #[test]
    fn test_try_toggle_reports_out_of_bounds() {
        let mut engine = GridEngine::new();
        assert_eq!(
            engine.try_toggle_cell(80, 1),
            Err(EngineError::OutOfBounds { x: 80, y: 1, width: 80, height: 60 })
        );
        assert!(engine.try_toggle_cell(79, 59).is_ok());
        assert!(engine.is_alive(79, 59));
    }

    #[test]
    fn test_clear() {
        let mut engine = GridEngine::new();
        for i in 0..20 {
            engine.toggle_cell(i * 3, i * 2);
        }
        engine.advance_generation();
        engine.clear();

        assert!(engine.buffer().iter().all(|&cell| cell == DEAD));
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_raw_view_writes_feed_next_generation() {
        let mut engine = GridEngine::new();
        {
            let view = engine.raw_buffer_view();
            let row = 10 * WIDTH;
            view[row + 20] = ALIVE;
            view[row + 21] = ALIVE;
            view[row + 22] = ALIVE;
        }
        engine.advance_generation();

        assert!(engine.is_alive(21, 9));
        assert!(engine.is_alive(21, 10));
        assert!(engine.is_alive(21, 11));
        assert_eq!(engine.live_count(), 3);
    }

    #[test]
    fn test_raw_view_nonzero_bytes_count_once() {
        let mut engine = GridEngine::with_dimensions(5, 5).unwrap();
        {
            let view = engine.raw_buffer_view();
            view[5 + 1] = 7;
            view[5 + 2] = 255;
            view[5 + 3] = ALIVE;
        }

        assert_eq!(engine.count_neighbors(2, 0), Some(3));
        assert_eq!(engine.live_count(), 3);

        engine.advance_generation();
        assert_eq!(engine.buffer().iter().filter(|&&cell| cell == ALIVE).count(), 3);
        assert!(engine.buffer().iter().all(|&cell| cell <= ALIVE));
    }

    #[test]
    fn test_buffer_address_is_stable() {
        let mut engine = GridEngine::new();
        let before = engine.buffer().as_ptr();
        engine.toggle_cell(1, 1);
        engine.advance_generation();
        assert_eq!(engine.buffer().as_ptr(), before);
    }

    #[test]
    fn test_count_neighbors_accessor() {
        let mut engine = GridEngine::new();
        engine.toggle_cell(79, 59);
        assert_eq!(engine.count_neighbors(0, 0), Some(1));
        assert_eq!(engine.count_neighbors(80, 0), None);
    }

    #[test]
    fn test_generation_counter() {
        let mut engine = GridEngine::new();
        engine.advance_generation();
        engine.advance_generation();
        assert_eq!(engine.generation(), 2);
    }
}
