//! Conway's Game of Life rules (B3/S23)

use super::grid::{Grid, ALIVE, DEAD};

/// Neighbor counts that keep a live cell alive
pub const SURVIVAL: &[u8] = &[2, 3];
/// Neighbor counts that bring a dead cell to life
pub const BIRTH: &[u8] = &[3];

/// Game of Life rules engine
pub struct LifeRules;

impl LifeRules {
    /// Next state of a cell given its current byte and live-neighbor count
    pub fn next_state(cell: u8, live_neighbors: u8) -> u8 {
        let table = if cell != DEAD { SURVIVAL } else { BIRTH };
        if table.contains(&live_neighbors) {
            ALIVE
        } else {
            DEAD
        }
    }

    /// Write the generation after `current` into `next`.
    ///
    /// Every count is read from `current`, so `next` never observes a
    /// partially advanced grid. Both grids must share dimensions.
    pub fn evolve_into(current: &Grid, next: &mut Grid) {
        debug_assert_eq!((current.width, current.height), (next.width, next.height));

        let width = current.width;
        let cells = current.as_bytes();
        for (idx, slot) in next.as_bytes_mut().iter_mut().enumerate() {
            let (row, col) = (idx / width, idx % width);
            *slot = Self::next_state(cells[idx], current.count_neighbors(row, col));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        LifeRules::evolve_into(current, &mut next);
        next
    }

    #[test]
    fn test_still_life_block() {
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let evolved = evolve(&grid);

        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        let cells = vec![
            vec![false, false, false, false, false],
            vec![false, false, false, false, false],
            vec![false, true, true, true, false],
            vec![false, false, false, false, false],
            vec![false, false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let evolved = evolve(&grid);

        let expected_cells = vec![
            vec![false, false, false, false, false],
            vec![false, false, true, false, false],
            vec![false, false, true, false, false],
            vec![false, false, true, false, false],
            vec![false, false, false, false, false],
        ];
        let expected = Grid::from_cells(expected_cells).unwrap();
        assert_eq!(evolved, expected);

        let evolved_twice = evolve(&evolved);
        assert_eq!(grid, evolved_twice);
    }

    #[test]
    fn test_blinker_across_the_seam() {
        // Horizontal blinker centred on column 0 wraps through the right edge
        let mut grid = Grid::new(6, 6).unwrap();
        for col in [5, 0, 1] {
            grid.set(3, col, true).unwrap();
        }

        let evolved = evolve(&grid);
        let mut vertical = Grid::new(6, 6).unwrap();
        for row in [2, 3, 4] {
            vertical.set(row, 0, true).unwrap();
        }
        assert_eq!(evolved, vertical);
        assert_eq!(evolve(&evolved), grid);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut grid = Grid::new(7, 5).unwrap();
        for _ in 0..3 {
            grid = evolve(&grid);
            assert!(grid.is_empty());
        }
    }

    #[test]
    fn test_rule_logic() {
        assert_eq!(LifeRules::next_state(ALIVE, 2), ALIVE);
        assert_eq!(LifeRules::next_state(ALIVE, 3), ALIVE);
        assert_eq!(LifeRules::next_state(DEAD, 3), ALIVE);
        assert_eq!(LifeRules::next_state(ALIVE, 1), DEAD);
        assert_eq!(LifeRules::next_state(ALIVE, 4), DEAD);
        assert_eq!(LifeRules::next_state(DEAD, 2), DEAD);
        assert_eq!(LifeRules::next_state(DEAD, 8), DEAD);
    }

    #[test]
    fn test_next_state_follows_rule_tables() {
        for count in 0..=8u8 {
            assert_eq!(LifeRules::next_state(ALIVE, count) == ALIVE, SURVIVAL.contains(&count));
            assert_eq!(LifeRules::next_state(DEAD, count) == ALIVE, BIRTH.contains(&count));
        }
    }
}
