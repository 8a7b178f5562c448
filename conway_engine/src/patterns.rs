// patterns.rs - Starting shapes and the seeded random fill

use crate::Grid;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A named starting shape. Coordinates are `(row, col)` relative to the
/// pattern's top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// `(height, width)` of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(row, col)| (h.max(row + 1), w.max(col + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Clears the grid and places `pattern` in its centre.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();

    let (height, width) = pattern.extent();
    let top = grid.size().saturating_sub(height) / 2;
    let left = grid.size().saturating_sub(width) / 2;

    for &(row, col) in pattern.cells {
        // Whatever does not fit on a small grid is clipped.
        let _ = grid.set(row + top, col + left, true);
    }
}

/// Fills the grid from a seeded generator; about a third of cells end up alive.
///
/// The seed is hashed with `DefaultHasher`, so a seed reproduces the same grid
/// within one build but not necessarily across Rust releases.
pub fn apply_random_pattern(grid: &mut Grid, seed_value: u64) {
    grid.clear();

    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            let _ = grid.set(row, col, (seed >> 16) % 3 == 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str) -> &'static Pattern {
        PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    fn evolve(grid: &Grid, generations: usize) -> Grid {
        (0..generations).fold(grid.clone(), |g, _| g.successor())
    }

    #[test]
    fn every_pattern_fits_the_default_grid() {
        for pattern in PATTERNS {
            let mut grid = Grid::new(40);
            apply_pattern(&mut grid, pattern);
            assert_eq!(grid.live_count(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn pattern_replaces_previous_contents() {
        let mut grid = Grid::with_alive(40, &[(0, 0), (39, 39)]).unwrap();
        apply_pattern(&mut grid, pattern("Blinker"));

        assert!(!grid.get(0, 0).unwrap());
        assert!(!grid.get(39, 39).unwrap());
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(19, 18), (19, 19), (19, 20)]);
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let mut grid = Grid::new(10);
        apply_pattern(&mut grid, pattern("Gosper Glider Gun"));

        let gun = pattern("Gosper Glider Gun");
        assert!(grid.live_count() > 0);
        assert!(grid.live_count() < gun.cells.len());
    }

    #[test]
    fn glider_moves_one_cell_diagonally_every_four_generations() {
        let mut grid = Grid::new(40);
        apply_pattern(&mut grid, pattern("Glider"));

        let shifted: Vec<_> = grid
            .alive_cells()
            .map(|(row, col)| (row + 1, col + 1))
            .collect();
        let later = evolve(&grid, 4);

        assert_eq!(later.alive_cells().collect::<Vec<_>>(), shifted);
    }

    #[test]
    fn pulsar_has_period_three() {
        let mut grid = Grid::new(40);
        apply_pattern(&mut grid, pattern("Pulsar"));

        assert_ne!(evolve(&grid, 1), grid);
        assert_eq!(evolve(&grid, 3), grid);
    }

    #[test]
    fn random_fill_is_repeatable_per_seed() {
        let mut first = Grid::new(40);
        let mut second = Grid::new(40);
        apply_random_pattern(&mut first, 7);
        apply_random_pattern(&mut second, 7);

        assert_eq!(first, second);
        let live = first.live_count();
        assert!(live > 300 && live < 800, "unexpected density: {live}");
    }
}
