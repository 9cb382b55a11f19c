// ============================================================================
// Rounded Distribution Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Positional - Slices of integer and float weights at growing sizes
// 2. Keyed - HashMap sources materialized into new maps
// 3. Rescue - Inputs where most shares round to zero and must be rebalanced
// 4. Output - Writing into a pre-sized buffer with a mapper
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rounded_distribution::prelude::*;
use std::collections::HashMap;
use std::hint::black_box;

/// Precision that admits `count` elements.
fn precision_for(count: usize) -> u32 {
    (0..=12)
        .find(|&p| DistributionConfig::percent(p).element_limit() >= count)
        .unwrap_or(12)
}

fn weights(count: usize) -> Vec<i64> {
    (0..count as i64).map(|i| 100 + (i * 7919) % 1000).collect()
}

// ============================================================================
// Positional Benchmarks
// ============================================================================

fn benchmark_positional(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional");

    for count in [5usize, 100, 1000, 10_000].iter() {
        let precision = precision_for(*count);
        let distributor = RoundedDistributor::new(DistributionConfig::percent(precision));
        let longs = weights(*count);
        let doubles: Vec<f64> = longs.iter().map(|&w| w as f64 / 3.0).collect();

        group.bench_with_input(BenchmarkId::new("i64", count), &longs, |b, longs| {
            b.iter(|| black_box(distributor.allocate(longs.as_slice())))
        });

        group.bench_with_input(BenchmarkId::new("f64", count), &doubles, |b, doubles| {
            b.iter(|| black_box(distributor.allocate(doubles.as_slice())))
        });
    }

    group.finish();
}

// ============================================================================
// Keyed Benchmarks
// ============================================================================

fn benchmark_keyed(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed");

    for count in [5usize, 100, 1000].iter() {
        let precision = precision_for(*count);
        let distributor = RoundedDistributor::new(DistributionConfig::percent(precision));
        let source: HashMap<u32, i64> = weights(*count)
            .into_iter()
            .enumerate()
            .map(|(key, weight)| (key as u32, weight))
            .collect();

        group.bench_with_input(BenchmarkId::new("hash_map", count), &source, |b, source| {
            b.iter(|| black_box(distributor.distribute(source)))
        });
    }

    group.finish();
}

// ============================================================================
// Rescue Benchmarks
// One dominant weight; every other share starts at zero units
// ============================================================================

fn benchmark_rescue(c: &mut Criterion) {
    let mut group = c.benchmark_group("rescue");

    for count in [100usize, 1000].iter() {
        let distributor = RoundedDistributor::new(DistributionConfig::percent(3));
        let mut source = vec![1_000i64; *count];
        source[0] = 1_000_000_000;

        group.bench_with_input(BenchmarkId::new("dominant", count), &source, |b, source| {
            b.iter(|| black_box(distributor.allocate(source.as_slice())))
        });
    }

    group.finish();
}

// ============================================================================
// Output Benchmarks
// ============================================================================

fn benchmark_into_slice(c: &mut Criterion) {
    let source = weights(1000);
    let mut output = vec![0i64; source.len()];
    let distributor = RoundedDistributor::new(DistributionConfig::percent(3));

    c.bench_function("into_slice_truncated", |b| {
        b.iter(|| {
            black_box(distributor.distribute_into(
                source.as_slice(),
                output.as_mut_slice(),
                |value| value as i64,
            ))
        });
    });
}

criterion_group!(
    benches,
    benchmark_positional,
    benchmark_keyed,
    benchmark_rescue,
    benchmark_into_slice,
);
criterion_main!(benches);
