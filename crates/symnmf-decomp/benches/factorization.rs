//! Benchmarks for SymNMF and the k-means baseline
//!
//! One SymNMF iteration is O(n² · k); the benches run a fixed number of iterations
//! with tol = 0 so timings are comparable across seeds.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use symnmf_core::Matrix;
use symnmf_decomp::{initialize_factor, kmeans, symnmf, KMeansOptions, SymNmfConfig};
use symnmf_graph::normalized;

fn bench_symnmf(c: &mut Criterion) {
    let mut group = c.benchmark_group("symnmf_20_iters");
    let config = SymNmfConfig::default().with_max_iter(20).with_tol(0.0);

    for &(n, k) in &[(100, 2), (250, 4), (500, 8)] {
        let points = Matrix::random_uniform(n, 2, -3.0, 3.0, 0);
        let w = normalized(&points, n, 2).expect("bounded points have non-zero degree");
        let h0 = initialize_factor(&w, k, 0).expect("valid rank");

        group.throughput(Throughput::Elements((n * n * k) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n{}_k{}", n, k)),
            &(w, h0),
            |b, (w, h0)| b.iter(|| black_box(symnmf(black_box(w), black_box(h0), n, k, &config))),
        );
    }

    group.finish();
}

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");
    group.sample_size(20);

    for &(n, k) in &[(100, 2), (500, 4), (1000, 8)] {
        let points = Matrix::random_uniform(n, 4, -3.0, 3.0, 1);
        let options = KMeansOptions::new(k);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n{}_k{}", n, k)),
            &points,
            |b, points| b.iter(|| black_box(kmeans(black_box(points), &options))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_symnmf, bench_kmeans);
criterion_main!(benches);
