use conway_grow::{BoundedEngine, Engine, Grid, GrowingEngine, GrowthPolicy};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;
const GENERATIONS: u64 = 32;

fn soup(n: usize) -> Grid {
    Grid::random(n, n, Some(SEED), FILL_RATE).unwrap()
}

fn growing<const N: usize>(c: &mut Criterion) {
    for policy in [GrowthPolicy::Minimal, GrowthPolicy::Uniform] {
        c.bench_function(&format!("growing_{:?}_{}", policy, N), |b| {
            b.iter_batched(
                || GrowingEngine::with_policy(soup(N), policy),
                |mut life| life.update(GENERATIONS),
                BatchSize::SmallInput,
            )
        });
    }
}

fn bounded<const N: usize>(c: &mut Criterion) {
    c.bench_function(&format!("bounded_{}", N), |b| {
        b.iter_batched(
            || BoundedEngine::new(soup(N)),
            |mut life| life.update(GENERATIONS),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, growing<32>, growing<128>, bounded<32>, bounded<128>);
criterion_main!(benches);
