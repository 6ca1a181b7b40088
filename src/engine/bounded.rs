use crate::{Engine, Grid};

/// Naive fixed-size engine: cells beyond the edges are permanently dead.
///
/// Matches [`GrowingEngine`](crate::GrowingEngine) as long as life stays away
/// from the edges, which makes it a reference for tests and benchmarks.
pub struct BoundedEngine {
    cells_curr: Grid,
    cells_next: Grid,
    generation: u64,
}

impl BoundedEngine {
    pub fn new(grid: Grid) -> Self {
        Self {
            cells_next: grid.clone(),
            cells_curr: grid,
            generation: 0,
        }
    }
}

impl Engine for BoundedEngine {
    fn current_state(&self) -> &Grid {
        &self.cells_curr
    }

    fn advance(&mut self) {
        let (height, width) = self.cells_curr.size();
        for y in 0..height {
            for x in 0..width {
                let neibs = self.cells_curr.live_neighbours(y as isize, x as isize);
                let next = if self.cells_curr.get(y, x) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                self.cells_next.set(y, x, next);
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
