// ============================================================================
// Broadcast Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - validated construction from integer and float inputs
// 2. Broadcast - scalar and paired elementwise arithmetic
// 3. Statistics - ordering-backed value queries
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decseq::generators::arithmetic_range;
use decseq::prelude::*;

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [8_i64, 64, 512].iter() {
        let ints: Vec<i64> = (0..*size).collect();
        let floats: Vec<f64> = (0..*size).map(|i| i as f64 * 0.125).collect();

        group.bench_with_input(BenchmarkId::new("from_ints", size), &ints, |b, ints| {
            b.iter(|| black_box(Sequence::new(ints.clone()).unwrap()));
        });

        group.bench_with_input(
            BenchmarkId::new("from_floats", size),
            &floats,
            |b, floats| {
                b.iter(|| black_box(Sequence::new(floats.clone()).unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");

    for size in [8_usize, 64, 512].iter() {
        let a = arithmetic_range(0, 100, *size).unwrap();
        let b = arithmetic_range(100, 200, *size).unwrap();

        group.bench_with_input(BenchmarkId::new("scalar_add", size), &a, |bench, a| {
            bench.iter(|| black_box(a.checked_add(7).unwrap()));
        });

        group.bench_with_input(
            BenchmarkId::new("sequence_mul", size),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.checked_mul(*b).unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    let seq = arithmetic_range(0, 1000, 512).unwrap();

    group.bench_function("median_512", |b| {
        b.iter(|| black_box(seq.median().unwrap()));
    });

    group.bench_function("mean_512", |b| {
        b.iter(|| black_box(seq.mean().unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_broadcast,
    benchmark_statistics
);
criterion_main!(benches);
