//! Criterion benchmarks for neighborhood generation and the tabu loop.
//!
//! The relocation neighborhood has `tasks × (processors − 1)` members and
//! is rebuilt every iteration, so its construction cost dominates a run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_partition::neighborhood::neighbors;
use u_partition::objective::Makespan;
use u_partition::schedule::Schedule;
use u_partition::search::PartitionProblem;
use u_partition::tabu::{TabuConfig, TabuRunner};

fn random_tasks(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(1..100)).collect()
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    for &(processors, tasks) in &[(4, 50), (8, 100), (16, 200)] {
        let mut rng = StdRng::seed_from_u64(42);
        let state = Schedule::random(processors, random_tasks(tasks, 1), &mut rng).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{processors}x{tasks}")),
            &state,
            |b, s| b.iter(|| black_box(neighbors(black_box(s)))),
        );
    }
    group.finish();
}

fn bench_tabu_makespan(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_makespan");
    group.sample_size(10);

    for &(processors, tasks) in &[(3, 20), (5, 50)] {
        let problem = PartitionProblem::new(processors, random_tasks(tasks, 2), Makespan).unwrap();
        let config = TabuConfig::default()
            .with_max_iterations(100)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{processors}x{tasks}")),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = TabuRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_neighbors, bench_tabu_makespan);
criterion_main!(benches);
