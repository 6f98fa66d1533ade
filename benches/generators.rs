use criterion::{criterion_group, criterion_main, Criterion};
use tilemaze::{
    generators::{self, MazeSeed},
    units::{Height, Width},
};

const BENCH_SEED: MazeSeed = [0xb0a7_1e55, 0x5eed_0001, 0x5eed_0002, 0x5eed_0003];

fn bench_frontier_growth_maze_21(c: &mut Criterion) {
    c.bench_function("frontier_growth_maze_21", |b| {
        b.iter(|| generators::generate(Width(21), Height(21), BENCH_SEED).unwrap())
    });
}

fn bench_frontier_growth_maze_63(c: &mut Criterion) {
    c.bench_function("frontier_growth_maze_63", |b| {
        b.iter(|| generators::generate(Width(63), Height(63), BENCH_SEED).unwrap())
    });
}

fn bench_frontier_growth_maze_127(c: &mut Criterion) {
    c.bench_function("frontier_growth_maze_127", |b| {
        b.iter(|| generators::generate(Width(127), Height(127), BENCH_SEED).unwrap())
    });
}

criterion_group!(
    benches,
    bench_frontier_growth_maze_21,
    bench_frontier_growth_maze_63,
    bench_frontier_growth_maze_127
);
criterion_main!(benches);
