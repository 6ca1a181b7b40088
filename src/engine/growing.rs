use crate::{Engine, Grid, GrowthPolicy, Padding, Result};
use tracing::debug;

/// Read-only copy of a generation surrounded by dead cells.
///
/// Neighbour counts are taken from here only, so writes to the next
/// generation never leak into the step that produces them.
pub(crate) struct Snapshot {
    cells: Grid,
}

impl Snapshot {
    /// Evaluated positions reach one layer beyond the grid and their
    /// neighbours one more, so two dead layers keep every lookup in bounds.
    const BORDER: usize = 2;

    pub(crate) fn new(grid: &Grid) -> Self {
        Self {
            cells: grid.padded(Padding::uniform(Self::BORDER)),
        }
    }

    fn index(row: isize, col: isize) -> (usize, usize) {
        let b = Self::BORDER as isize;
        ((row + b) as usize, (col + b) as usize)
    }

    pub(crate) fn get(&self, row: isize, col: isize) -> bool {
        let (y, x) = Self::index(row, col);
        self.cells.get(y, x)
    }

    /// Moore neighbourhood count; valid for positions at most one cell beyond the grid.
    pub(crate) fn live_neighbours(&self, row: isize, col: isize) -> u8 {
        let (y, x) = Self::index(row, col);
        let mut count = 0;
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                count += self.cells.get(ny, nx) as u8;
            }
        }
        count - self.cells.get(y, x) as u8
    }
}

/// Engine whose field grows when life is born just beyond its edges.
///
/// Each step reads the previous generation from a bordered [`Snapshot`],
/// collects every death and birth, sizes the next grid once from the births
/// that fall outside the current bounds and then writes all updates with a
/// single coordinate offset. The grid never shrinks.
pub struct GrowingEngine {
    grid: Grid,
    policy: GrowthPolicy,
    generation: u64,
    last_padding: Padding,
}

impl GrowingEngine {
    pub fn new(grid: Grid) -> Self {
        Self::with_policy(grid, GrowthPolicy::default())
    }

    pub fn with_policy(grid: Grid, policy: GrowthPolicy) -> Self {
        Self {
            grid,
            policy,
            generation: 0,
            last_padding: Padding::NONE,
        }
    }

    /// Validates a raw `0`/`1` matrix and wraps it into an engine.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        Ok(Self::new(Grid::from_rows(rows)?))
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: GrowthPolicy) {
        self.policy = policy;
    }

    /// Padding applied by the most recent step.
    pub fn last_padding(&self) -> Padding {
        self.last_padding
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    fn next_generation(&self) -> (Grid, Padding) {
        let snapshot = Snapshot::new(&self.grid);
        let (height, width) = self.grid.size();
        let (h, w) = (height as isize, width as isize);

        let (mut deaths, mut births) = (vec![], vec![]);
        for row in -1..=h {
            for col in -1..=w {
                let neibs = snapshot.live_neighbours(row, col);
                if snapshot.get(row, col) {
                    if !(2..=3).contains(&neibs) {
                        deaths.push((row, col));
                    }
                } else if neibs == 3 {
                    births.push((row, col));
                }
            }
        }

        let padding = self.policy.padding_for(&births, height, width);
        let mut next = self.grid.padded(padding);
        let (dy, dx) = (padding.top as isize, padding.left as isize);
        for (row, col) in deaths {
            next.set((row + dy) as usize, (col + dx) as usize, false);
        }
        for (row, col) in births {
            next.set((row + dy) as usize, (col + dx) as usize, true);
        }
        (next, padding)
    }
}

impl Engine for GrowingEngine {
    fn current_state(&self) -> &Grid {
        &self.grid
    }

    fn advance(&mut self) {
        let (next, padding) = self.next_generation();
        self.grid = next;
        self.last_padding = padding;
        self.generation += 1;
        if !padding.is_empty() {
            let (height, width) = self.grid.size();
            debug!(
                generation = self.generation,
                ?padding,
                height,
                width,
                "grid grew"
            );
        }
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
