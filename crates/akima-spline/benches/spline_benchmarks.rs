//! Benchmarks for Akima spline fitting and evaluation.
//!
//! Run with: cargo bench -p akima-spline

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use akima_spline::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_test_data(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
    let ys: Vec<f64> = xs
        .iter()
        .map(|x| (0.7 * x).sin() + 0.1 * x + if (*x as usize) % 7 == 0 { 0.5 } else { 0.0 })
        .collect();
    (xs, ys)
}

// =============================================================================
// FIT
// =============================================================================

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for n in [8, 64, 512, 4096] {
        let (xs, ys) = create_test_data(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| fit(black_box(&xs), black_box(&ys)))
        });
    }

    group.finish();
}

// =============================================================================
// EVALUATE
// =============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let (xs, ys) = create_test_data(512);
    let spline = fit(&xs, &ys).expect("benchmark data must fit");

    let mut group = c.benchmark_group("evaluate");

    group.bench_function("single_interior", |b| {
        b.iter(|| spline.evaluate(black_box(100.3)))
    });

    group.bench_function("single_extrapolated", |b| {
        b.iter(|| spline.evaluate(black_box(-10.0)))
    });

    let queries: Vec<f64> = (0..1000).map(|i| i as f64 * 0.2557).collect();
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            queries
                .iter()
                .map(|x| spline.evaluate(*x))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("derivative_batch_1000", |b| {
        b.iter(|| {
            queries
                .iter()
                .map(|x| spline.derivative(*x))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

// =============================================================================
// CRITERION GROUPS
// =============================================================================

criterion_group!(fitting, bench_fit);
criterion_group!(evaluation, bench_evaluate);

criterion_main!(fitting, evaluation);
