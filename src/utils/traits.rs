use crate::Grid;

/// Game engine for Game of Life
pub trait Engine {
    /// Returns the current state of the field.
    fn current_state(&self) -> &Grid;

    /// Advances the field by a single generation.
    ///
    /// Every cell of the next generation is derived from the previous one only,
    /// updates made during the step are never observed by the same step.
    fn advance(&mut self);

    /// Number of generations computed since construction.
    fn generation(&self) -> u64;

    /// Advances the field by `generations` generations.
    fn update(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Total number of alive cells in the field.
    fn population(&self) -> usize {
        self.current_state().population()
    }

    /// Returns multiline string reporting engine stats.
    fn statistics(&self) -> String {
        let (height, width) = self.current_state().size();
        format!(
            "Generation: {}\nPopulation: {}\nSize: {} x {}",
            self.generation(),
            self.population(),
            height,
            width
        )
    }
}
