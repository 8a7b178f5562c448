// grid.rs - Bordered cell grid and the generation rule

use crate::LifeError;

/// Width of the dead ring kept around the active area so neighbour
/// lookups never leave the buffer.
const BORDER: usize = 1;

/// Square `size x size` grid of cells.
///
/// Cells live in a flat buffer of `(size + 2)^2` entries; the outer ring is
/// always dead and stands in for "no neighbour" at the hard edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid.
    pub fn new(size: usize) -> Self {
        let stride = size + 2 * BORDER;
        Self {
            size,
            cells: vec![false; stride * stride],
        }
    }

    /// Grid with the listed cells alive.
    pub fn with_alive(size: usize, alive: &[(usize, usize)]) -> Result<Self, LifeError> {
        let mut grid = Self::new(size);
        for &(row, col) in alive {
            grid.set(row, col, true)?;
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn stride(&self) -> usize {
        self.size + 2 * BORDER
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        (row + BORDER) * self.stride() + col + BORDER
    }

    fn checked_offset(&self, row: usize, col: usize) -> Result<usize, LifeError> {
        if row < self.size && col < self.size {
            Ok(self.offset(row, col))
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, LifeError> {
        self.checked_offset(row, col).map(|offset| self.cells[offset])
    }

    /// Like [`Grid::get`] but treats anything off the grid as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), LifeError> {
        let offset = self.checked_offset(row, col)?;
        self.cells[offset] = alive;
        Ok(())
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, LifeError> {
        let offset = self.checked_offset(row, col)?;
        self.cells[offset] = !self.cells[offset];
        Ok(self.cells[offset])
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Rows of the active area, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let size = self.size;
        self.cells
            .chunks(self.stride())
            .skip(BORDER)
            .take(size)
            .map(move |row| &row[BORDER..BORDER + size])
    }

    /// Coordinates of every live cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    pub fn live_neighbors(&self, row: usize, col: usize) -> Result<u8, LifeError> {
        self.checked_offset(row, col)
            .map(|offset| self.neighbors_at(offset))
    }

    fn neighbors_at(&self, offset: usize) -> u8 {
        let stride = self.stride();
        let neighbors = [
            offset - stride - 1, offset - stride, offset - stride + 1,
            offset - 1,                           offset + 1,
            offset + stride - 1, offset + stride, offset + stride + 1,
        ];
        neighbors.iter().filter(|&&n| self.cells[n]).count() as u8
    }

    /// Next generation, computed entirely from `self`.
    pub fn successor(&self) -> Grid {
        let mut next = Grid::new(self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                let offset = self.offset(row, col);
                next.cells[offset] = match (self.cells[offset], self.neighbors_at(offset)) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                };
            }
        }
        debug_assert!(next.border_is_dead(), "border ring must stay dead");
        next
    }

    fn border_is_dead(&self) -> bool {
        let stride = self.stride();
        let last = stride - 1;
        (0..stride).all(|i| {
            !self.cells[i]
                && !self.cells[last * stride + i]
                && !self.cells[i * stride]
                && !self.cells[i * stride + last]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_stays_empty() {
        let grid = Grid::new(10);
        assert_eq!(grid.successor(), grid);
    }

    #[test]
    fn lone_cell_dies() {
        let grid = Grid::with_alive(5, &[(2, 2)]).unwrap();
        assert_eq!(grid.successor().live_count(), 0);
    }

    #[test]
    fn block_is_still_life() {
        let block = Grid::with_alive(8, &[(3, 3), (3, 4), (4, 3), (4, 4)]).unwrap();
        assert_eq!(block.successor(), block);
    }

    #[test]
    fn blinker_has_period_two() {
        let blinker = Grid::with_alive(7, &[(3, 2), (3, 3), (3, 4)]).unwrap();
        let flipped = blinker.successor();

        assert_ne!(flipped, blinker);
        assert_eq!(
            flipped.alive_cells().collect::<Vec<_>>(),
            vec![(2, 3), (3, 3), (4, 3)]
        );
        assert_eq!(flipped.successor(), blinker);
    }

    #[test]
    fn corner_neighbors_do_not_wrap() {
        let size = 6;
        let mut grid = Grid::with_alive(size, &[(0, 0), (0, 1), (1, 0), (1, 1)]).unwrap();
        // Opposite edges would add neighbours if the grid wrapped.
        grid.set(size - 1, size - 1, true).unwrap();
        grid.set(0, size - 1, true).unwrap();
        grid.set(size - 1, 0, true).unwrap();

        assert_eq!(grid.live_neighbors(0, 0).unwrap(), 3);
        assert!(grid.successor().get(0, 0).unwrap());
    }

    #[test]
    fn overcrowded_cell_dies_and_dead_cell_with_three_is_born() {
        // Plus shape: centre has 4 neighbours.
        let grid = Grid::with_alive(5, &[(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]).unwrap();
        let next = grid.successor();

        assert!(!next.get(2, 2).unwrap());
        assert!(next.get(1, 1).unwrap());
        assert!(next.get(3, 3).unwrap());
    }

    #[test]
    fn successor_reads_only_the_previous_generation() {
        // A row of three along the top edge: updating in place would let the
        // newly born (1,1) feed into later counts.
        let grid = Grid::with_alive(4, &[(0, 0), (0, 1), (0, 2)]).unwrap();
        let next = grid.successor();

        assert_eq!(next.alive_cells().collect::<Vec<_>>(), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn out_of_range_access_is_rejected() {
        let mut grid = Grid::new(4);
        let before = grid.clone();

        assert_eq!(
            grid.toggle(4, 0),
            Err(LifeError::OutOfBounds { row: 4, col: 0, size: 4 })
        );
        assert!(grid.set(0, usize::MAX, true).is_err());
        assert!(grid.get(7, 7).is_err());
        assert_eq!(grid, before);
        assert!(!grid.is_alive(9, 9));
    }

    #[test]
    fn rows_cover_only_the_active_area() {
        let grid = Grid::with_alive(3, &[(0, 2), (2, 0)]).unwrap();
        let rows: Vec<Vec<bool>> = grid.rows().map(<[bool]>::to_vec).collect();

        assert_eq!(
            rows,
            vec![
                vec![false, false, true],
                vec![false, false, false],
                vec![true, false, false],
            ]
        );
        assert_eq!(grid.live_count(), 2);
    }
}
