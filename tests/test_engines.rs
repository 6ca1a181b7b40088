#[cfg(test)]
mod tests {
    use conway_grow::{
        parse_rle, BoundedEngine, Engine, Grid, GrowingEngine, GrowthPolicy, Padding,
    };

    const SEED: u64 = 42;
    const FILL_RATE: f64 = 0.35;

    /// Runs both engines side by side; the bounded one gets enough dead margin
    /// that its edges are never reached.
    fn assert_engines_agree(initial: Grid, policy: GrowthPolicy, generations: usize) {
        let margin = generations + 2;
        let mut growing = GrowingEngine::with_policy(initial.clone(), policy);
        let mut bounded = BoundedEngine::new(initial.padded(Padding::uniform(margin)));

        // position of the growing grid's origin inside the bounded one
        let (mut top, mut left) = (margin, margin);
        for generation in 1..=generations {
            growing.advance();
            bounded.advance();
            let padding = growing.last_padding();
            top -= padding.top;
            left -= padding.left;

            let shifted = growing
                .current_state()
                .alive_cells()
                .into_iter()
                .map(|(y, x)| (y + top, x + left))
                .collect::<Vec<_>>();
            let expected = bounded.current_state().alive_cells();
            if shifted != expected {
                panic!(
                    "Mismatch at generation {}:\n{}\nexpected:\n{}",
                    generation,
                    growing.current_state(),
                    bounded.current_state()
                );
            }
        }
        assert_eq!(growing.population(), bounded.population());
    }

    #[test]
    fn test_random_soups_match_bounded_engine() {
        for seed in SEED..SEED + 4 {
            let soup = Grid::random(10, 14, Some(seed), FILL_RATE).unwrap();
            assert_engines_agree(soup, GrowthPolicy::Minimal, 40);
        }
    }

    #[test]
    fn test_uniform_growth_matches_bounded_engine() {
        let soup = Grid::random(8, 8, Some(SEED), FILL_RATE).unwrap();
        assert_engines_agree(soup, GrowthPolicy::Uniform, 25);
    }

    #[test]
    fn test_glider_travels_and_grows_the_grid() {
        let glider = parse_rle(b"x = 3, y = 3\nbo$2bo$3o!").unwrap();
        let mut life = GrowingEngine::new(glider.clone());

        // a glider moves one cell diagonally every 4 generations
        life.update(8);
        assert_eq!(life.population(), 5);
        let (height, width) = life.current_state().size();
        assert_eq!((height, width), (5, 5));
        assert_eq!(
            life.current_state().alive_cells(),
            glider
                .alive_cells()
                .into_iter()
                .map(|(y, x)| (y + 2, x + 2))
                .collect::<Vec<_>>()
        );

        assert_engines_agree(glider, GrowthPolicy::Minimal, 60);
    }

    #[test]
    fn test_statistics_report_generation_and_size() {
        let mut life = GrowingEngine::from_rows(&[[1u8, 1, 1]]).unwrap();
        life.advance();
        let stats = life.statistics();
        assert!(stats.contains("Generation: 1"), "{}", stats);
        assert!(stats.contains("Population: 3"), "{}", stats);
        assert!(stats.contains("Size: 3 x 3"), "{}", stats);
    }
}
