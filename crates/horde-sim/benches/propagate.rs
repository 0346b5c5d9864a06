//! Propagation throughput across grid sizes and worker counts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use horde_core::SimParams;
use horde_sim::{propagate, scatter_populations, StepContext};
use horde_space::{EdgeBehavior, SquareGrid};

fn bench_propagate(c: &mut Criterion) {
    let params = SimParams {
        infection_growth: 0.3,
        zombie_loss: 0.1,
        human_loss: 0.05,
        ..SimParams::default()
    };

    let mut group = c.benchmark_group("propagate");
    for side in [16u32, 64, 128] {
        let space = SquareGrid::new(side, EdgeBehavior::Absorb).unwrap();
        let population = (space.cell_count() as u64) * 2;
        let grid = scatter_populations(space, population, population / 4, 42);
        for workers in [1usize, 4] {
            group.bench_with_input(
                BenchmarkId::new(format!("side_{side}"), workers),
                &workers,
                |b, &workers| {
                    let mut ctx = StepContext::new(42, workers);
                    b.iter(|| propagate(&grid, &params, 1.0, &mut ctx));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_propagate);
criterion_main!(benches);
