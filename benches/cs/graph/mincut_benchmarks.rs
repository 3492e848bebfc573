use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mincut::cs::graph::generate::{random_connected_graph, GraphDensity};
use mincut::cs::graph::{
    minimum_cut_randomized_with, stoer_wagner, KargerConfig, Sampling, Selection,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const SIZES: [usize; 3] = [32, 64, 128];

fn bench_stoer_wagner(c: &mut Criterion) {
    let mut group = c.benchmark_group("stoer_wagner");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for &n in &SIZES {
        let graph = random_connected_graph(n, GraphDensity::Dense, &mut rng).unwrap();
        let matrix = graph.to_weight_matrix().unwrap();

        group.bench_with_input(BenchmarkId::new("linear_scan", n), &matrix, |b, m| {
            b.iter(|| stoer_wagner(black_box(m), Selection::LinearScan))
        });
        group.bench_with_input(BenchmarkId::new("priority_queue", n), &matrix, |b, m| {
            b.iter(|| stoer_wagner(black_box(m), Selection::PriorityQueue))
        });
    }
    group.finish();
}

fn bench_karger(c: &mut Criterion) {
    let mut group = c.benchmark_group("karger");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for &n in &SIZES {
        let graph = random_connected_graph(n, GraphDensity::Random, &mut rng).unwrap();
        let edges = graph.to_unit_edges().unwrap();

        for (name, sampling, parallel) in [
            ("rejection", Sampling::Rejection, false),
            ("shuffle", Sampling::Shuffle, false),
            ("shuffle_parallel", Sampling::Shuffle, true),
        ] {
            let config = KargerConfig::default()
                .with_trials(50)
                .with_sampling(sampling)
                .with_parallel(parallel);
            group.bench_with_input(BenchmarkId::new(name, n), &edges, |b, e| {
                b.iter(|| minimum_cut_randomized_with(n, black_box(e), &config))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_stoer_wagner, bench_karger);
criterion_main!(benches);
