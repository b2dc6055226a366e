//! Criterion benchmarks for the coloring algorithms.
//!
//! Uses seeded `G(n, p)` random graphs so every run measures the same
//! instances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kcolor_hea::dsatur::color_greedy;
use kcolor_hea::gpx::gpx_crossover;
use kcolor_hea::graph::{random_graph, Graph};
use kcolor_hea::hea::{AlgorithmParams, HeaRunner};
use kcolor_hea::random::create_rng;
use kcolor_hea::tabu::{TabuConfig, TabuRunner};

fn instance(n: usize, p: f64) -> Graph {
    random_graph(n, p, &mut create_rng(42)).expect("valid density")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_dsatur(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsatur");

    for &n in &[100usize, 250, 500] {
        let graph = instance(n, 0.5);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| black_box(color_greedy(black_box(g), 20)))
        });
    }
    group.finish();
}

fn bench_tabucol(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabucol");
    group.sample_size(10);

    for (n, k) in [(100usize, 16usize), (250, 32)] {
        let graph = instance(n, 0.5);
        let seed = color_greedy(&graph, k).expect("k >= 1");
        let config = TabuConfig::default().with_max_iterations(2000);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_k{}", n, k), n),
            &(graph, seed, config),
            |b, (g, s, cfg)| {
                let mut rng = create_rng(7);
                b.iter(|| black_box(TabuRunner::run(g, k, s, cfg, &mut rng)))
            },
        );
    }
    group.finish();
}

fn bench_gpx(c: &mut Criterion) {
    let mut group = c.benchmark_group("gpx");

    for &n in &[100usize, 500] {
        let graph = instance(n, 0.5);
        let k = 20;
        let mut rng = create_rng(3);
        let p1 = color_greedy(&graph, k).expect("k >= 1");
        let p2 = TabuRunner::run(&graph, k, &p1, &TabuConfig::default(), &mut rng)
            .expect("valid seed")
            .coloring;
        group.bench_with_input(BenchmarkId::from_parameter(n), &(graph, p1, p2), |b, (g, p1, p2)| {
            b.iter(|| black_box(gpx_crossover(p1, p2, k, g, &mut rng)))
        });
    }
    group.finish();
}

fn bench_hea(c: &mut Criterion) {
    let mut group = c.benchmark_group("hea");
    group.sample_size(10);

    for (n, k) in [(50usize, 8usize), (100, 14)] {
        let graph = instance(n, 0.5);
        let params = AlgorithmParams::new(k)
            .with_pop_size(10)
            .with_max_iter_hea(20)
            .with_max_iter_tabu(500)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_k{}", n, k), n),
            &(graph, params),
            |b, (g, p)| b.iter(|| black_box(HeaRunner::run(black_box(g), black_box(p)))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_dsatur, bench_tabucol, bench_gpx, bench_hea);
criterion_main!(benches);
