//! Grid representation for the toroidal Game of Life

use crate::error::EngineError;
use itertools::iproduct;

/// Default number of columns
pub const WIDTH: usize = 80;
/// Default number of rows
pub const HEIGHT: usize = 60;

pub const ALIVE: u8 = 1;
pub const DEAD: u8 = 0;

const OFFSETS: [isize; 3] = [-1, 0, 1];

/// Row-major cell buffer, one byte per cell, wrapping at every edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let area = width
            .checked_mul(height)
            .filter(|&area| area > 0)
            .ok_or(EngineError::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![DEAD; area],
        })
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, EngineError> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);

        if cells.iter().any(|row| row.len() != width) {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        let mut grid = Self::new(width, height)?;
        for (cell, alive) in grid.cells.iter_mut().zip(cells.into_iter().flatten()) {
            *cell = if alive { ALIVE } else { DEAD };
        }
        Ok(grid)
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Cell byte at coordinates, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if self.contains(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|cell| cell != DEAD)
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), EngineError> {
        if !self.contains(row, col) {
            return Err(self.out_of_bounds(col as i64, row as i64));
        }
        let idx = self.index(row, col);
        self.cells[idx] = if alive { ALIVE } else { DEAD };
        Ok(())
    }

    /// Flip a cell between alive and dead
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        let alive = self.is_alive(row, col);
        self.set(row, col, !alive)
    }

    /// The 8 wrapped neighbor positions of a cell, as `(row, col)`
    pub fn neighbor_positions(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        iproduct!(OFFSETS, OFFSETS)
            .filter(|&offset| offset != (0, 0))
            .map(move |(dr, dc)| (wrap(row, dr, self.height), wrap(col, dc, self.width)))
    }

    /// Count living neighbors on the torus
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        self.neighbor_positions(row, col)
            .filter(|&(r, c)| self.cells[self.index(r, c)] != DEAD)
            .count() as u8
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != DEAD).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == DEAD)
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: u8) {
        self.cells.fill(value);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    pub(crate) fn out_of_bounds(&self, x: i64, y: i64) -> EngineError {
        EngineError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            cells: vec![DEAD; WIDTH * HEIGHT],
        }
    }
}

/// `(index + extent + delta) mod extent`, with `index < extent`
#[inline]
fn wrap(index: usize, delta: isize, extent: usize) -> usize {
    (index + extent).wrapping_add_signed(delta) % extent
}
