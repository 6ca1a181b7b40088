use crate::{LifeError, Padding, Result};
use std::fmt;

/// Rectangular field of alive/dead cells, stored row-major.
///
/// A `Grid` is never empty and never jagged: every constructor checks this.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid of dead cells with `height` rows and `width` columns.
    pub fn blank(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(LifeError::EmptyGrid);
        }
        let size = width
            .checked_mul(height)
            .filter(|&size| size <= isize::MAX as usize)
            .ok_or(LifeError::TooLarge { height, width })?;
        Ok(Self {
            cells: vec![false; size],
            width,
            height,
        })
    }

    /// Build a grid from rows of `0`/`1` values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut result = Self::blank(rows.len(), width)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(LifeError::JaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => {}
                    1 => result.set(row, col, true),
                    _ => return Err(LifeError::InvalidCell { row, col, value }),
                }
            }
        }
        Ok(result)
    }

    /// Create a grid with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    ///
    /// `fill_rate` is clamped to `[0, 1]`; NaN is rejected.
    pub fn random(height: usize, width: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        if fill_rate.is_nan() {
            return Err(LifeError::InvalidFillRate(fill_rate));
        }
        let fill_rate = fill_rate.clamp(0., 1.);
        let mut result = Self::blank(height, width)?;
        for cell in result.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        Ok(result)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn size(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Panics if `(row, col)` lies outside the grid.
    pub fn get(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.height && col < self.width);
        self.cells[col + row * self.width]
    }

    /// Panics if `(row, col)` lies outside the grid.
    pub fn set(&mut self, row: usize, col: usize, state: bool) {
        debug_assert!(row < self.height && col < self.width);
        self.cells[col + row * self.width] = state;
    }

    /// Cell state at signed coordinates; everything outside the grid is dead.
    pub fn get_or_dead(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        row < self.height && col < self.width && self.get(row, col)
    }

    /// Number of alive cells among the 8 neighbours of `(row, col)`.
    ///
    /// The position may lie outside the grid; cells beyond the edges count as dead.
    pub fn live_neighbours(&self, row: isize, col: isize) -> u8 {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if (dr, dc) != (0, 0) && self.get_or_dead(row + dr, col + dc) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Coordinates of alive cells in row-major order.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(|(i, _)| (i / self.width, i % self.width))
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    /// Rows as `0`/`1` values, the inverse of [`Grid::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&cell| cell as u8).collect())
            .collect()
    }

    /// Copy of the grid surrounded by dead layers as described by `padding`.
    pub fn padded(&self, padding: Padding) -> Self {
        let width = self.width + padding.left + padding.right;
        let height = self.height + padding.top + padding.bottom;
        let mut cells = vec![false; width * height];
        for (y, row) in self.rows().enumerate() {
            let start = padding.left + (y + padding.top) * width;
            cells[start..start + self.width].copy_from_slice(row);
        }
        Self {
            cells,
            width,
            height,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "  {}  |", cell as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_malformed_input() {
        let empty: [[u8; 0]; 0] = [];
        assert!(matches!(Grid::from_rows(&empty), Err(LifeError::EmptyGrid)));
        assert!(matches!(
            Grid::from_rows(&[[0u8; 0]]),
            Err(LifeError::EmptyGrid)
        ));
        assert!(matches!(
            Grid::from_rows(&[vec![0u8, 1, 0], vec![1, 1]]),
            Err(LifeError::JaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            Grid::from_rows(&[[0u8, 2]]),
            Err(LifeError::InvalidCell {
                row: 0,
                col: 1,
                value: 2
            })
        ));
        assert!(matches!(Grid::blank(0, 4), Err(LifeError::EmptyGrid)));
    }

    #[test]
    fn test_rows_round_trip_and_indexing() {
        let rows = vec![vec![0u8, 1, 0, 0], vec![1, 0, 0, 1]];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.size(), (2, 4));
        assert!(grid.get(0, 1));
        assert!(grid.get(1, 3));
        assert!(!grid.get(1, 1));
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.alive_cells(), vec![(0, 1), (1, 0), (1, 3)]);
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn test_padded_keeps_cells_at_shifted_positions() {
        let grid = Grid::from_rows(&[[1u8, 0], [0, 1]]).unwrap();
        let padding = Padding {
            top: 1,
            bottom: 0,
            left: 0,
            right: 1,
        };
        let padded = grid.padded(padding);
        assert_eq!(padded.size(), (3, 3));
        assert_eq!(padded.to_rows(), vec![vec![0, 0, 0], vec![1, 0, 0], vec![0, 1, 0]]);

        let uniform = grid.padded(Padding::uniform(1));
        assert_eq!(uniform.size(), (4, 4));
        assert_eq!(uniform.alive_cells(), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_neighbours_outside_the_grid_are_dead() {
        let grid = Grid::from_rows(&[[1u8, 1, 1]]).unwrap();
        assert_eq!(grid.live_neighbours(-1, 1), 3);
        assert_eq!(grid.live_neighbours(1, 1), 3);
        assert_eq!(grid.live_neighbours(0, 1), 2);
        assert_eq!(grid.live_neighbours(0, -1), 1);
        assert_eq!(grid.live_neighbours(-2, 1), 0);
        assert!(!grid.get_or_dead(0, 3));
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Grid::random(16, 24, Some(42), 0.3).unwrap();
        let b = Grid::random(16, 24, Some(42), 0.3).unwrap();
        assert_eq!(a, b);
        assert_eq!(Grid::random(8, 8, Some(1), 0.).unwrap().population(), 0);
        assert_eq!(Grid::random(8, 8, Some(1), 1.).unwrap().population(), 64);
        assert_eq!(Grid::random(4, 4, Some(1), 7.).unwrap().population(), 16);
    }

    #[test]
    fn test_random_rejects_nan_fill_rate() {
        assert!(matches!(
            Grid::random(2, 2, Some(1), f64::NAN),
            Err(LifeError::InvalidFillRate(_))
        ));
    }

    #[test]
    fn test_blank_rejects_oversized_grid() {
        assert!(matches!(
            Grid::blank(usize::MAX, 2),
            Err(LifeError::TooLarge {
                height: usize::MAX,
                width: 2
            })
        ));
        assert!(matches!(
            Grid::blank(2, usize::MAX / 2 + 1),
            Err(LifeError::TooLarge { .. })
        ));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_get_past_the_last_column_panics() {
        let grid = Grid::from_rows(&[[0u8, 0], [1, 0]]).unwrap();
        grid.get(0, 2);
    }

    #[test]
    fn test_display_table() {
        let grid = Grid::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        assert_eq!(grid.to_string(), "  0  |  1  |\n  1  |  0  |\n");
    }
}
