//! Benchmarks for descstats
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use descstats::format::LineFormat;
use descstats::statistics::{Accumulator, Moments};
use descstats::traits::Sketch;

// ============================================================================
// Moments Benchmarks
// ============================================================================

fn bench_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("moments");
    group.throughput(Throughput::Elements(1));

    group.bench_function("push", |b| {
        let mut moments = Moments::new();
        let mut i = 0u64;
        b.iter(|| {
            moments.push(i as f64);
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

// ============================================================================
// Accumulator Benchmarks
// ============================================================================

fn filled(n: u64) -> Accumulator<f64> {
    // Scrambled so the partial sort has real work to do
    (0..n).map(|i| ((i * 2_654_435_761) % 1_000_003) as f64).collect()
}

fn bench_accumulator(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulator");

    group.throughput(Throughput::Elements(1));
    group.bench_function("add", |b| {
        let mut acc = Accumulator::new();
        let mut i = 0u64;
        b.iter(|| {
            acc.add(i as f64);
            i = i.wrapping_add(1);
        });
    });

    for n in [1_000u64, 100_000] {
        group.throughput(Throughput::Elements(n));
        group.bench_function(format!("median_cold_{}", n), |b| {
            let acc = filled(n);
            b.iter_batched(
                || acc.clone(),
                |fresh| black_box(fresh.median()),
                BatchSize::LargeInput,
            );
        });
    }

    group.throughput(Throughput::Elements(1));
    group.bench_function("median_cached", |b| {
        let acc = filled(100_000);
        acc.median();
        b.iter(|| black_box(acc.median()));
    });

    group.bench_function("query_moments", |b| {
        let acc = filled(100_000);
        b.iter(|| {
            black_box(acc.mean());
            black_box(acc.standard_deviation());
            black_box(acc.max_value());
        });
    });

    group.bench_function("merge", |b| {
        let a = filled(10_000);
        let other = filled(10_000);
        b.iter_batched(
            || a.clone(),
            |mut merged| {
                merged.merge(black_box(&other));
                merged
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("render_line", |b| {
        let acc = filled(10_000);
        let format = LineFormat::new();
        b.iter(|| black_box(format.render(&acc.summary())));
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(benches, bench_moments, bench_accumulator);

criterion_main!(benches);
