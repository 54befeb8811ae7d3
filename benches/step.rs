use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_life::core::{next_generation, Grid, SimConfig, Simulation};

fn bench_next_generation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let grid = Grid::random(64, &mut rng);

    c.bench_function("next_generation_64x64", |b| {
        b.iter(|| next_generation(black_box(&grid)))
    });
}

fn bench_simulation_run(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let grid = Grid::random(32, &mut rng);
    let config = SimConfig {
        max_iterations: 100,
        ..SimConfig::default()
    };

    c.bench_function("simulate_32x32_100_iterations", |b| {
        b.iter(|| {
            let sim = Simulation::new(black_box(grid.clone()), config);
            sim.count()
        })
    });
}

criterion_group!(benches, bench_next_generation, bench_simulation_run);
criterion_main!(benches);
