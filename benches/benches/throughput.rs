//! SHA-256 Engine Criterion Benchmark
//!
//! Statistically rigorous performance measurements across all scenarios,
//! with the `sha2` crate as the reference point.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs. 55/56 straddle the one/two tail block split.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (16, "16B"),
        (55, "55B"),
        (56, "56B"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| sha256_engine::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK
// =============================================================================

/// Throughput once the body loop dominates.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(50);

    let sizes = [
        (8 * KB, "8KB-L1"),
        (64 * KB, "64KB-L2"),
        (512 * KB, "512KB-L3"),
        (4 * MB, "4MB"),
        (16 * MB, "16MB-RAM"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| sha256_engine::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: REFERENCE
// =============================================================================

/// Same inputs through `sha2`, to keep the numbers honest.
fn bench_reference(c: &mut Criterion) {
    use sha2::Digest;

    let mut group = c.benchmark_group("3-Reference");

    for (size, name) in [(64, "64B"), (4 * KB, "4KB"), (MB, "1MB")] {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("sha256-engine", name), &input, |b, data| {
            b.iter(|| sha256_engine::hash(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("sha2", name), &input, |b, data| {
            b.iter(|| sha2::Sha256::digest(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: SPECIAL OPERATIONS
// =============================================================================

/// Latency for secondary features (verification, engine reuse).
fn bench_special_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Special-Operations");

    let size = 64 * KB;
    let input = random_input(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("hash", |b| {
        b.iter(|| sha256_engine::hash(black_box(&input)))
    });

    // Reused engine: no backend lookup per call
    let mut engine = sha256_engine::Sha256Engine::new();
    group.bench_function("engine-reset-digest", |b| {
        b.iter(|| {
            engine.reset();
            engine.digest(black_box(&input)).unwrap()
        })
    });

    // Verification (constant-time)
    let digest = sha256_engine::hash(&input);
    group.bench_function("verify", |b| {
        b.iter(|| sha256_engine::verify(black_box(&input), black_box(&digest)))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 5: BATCH SCALING
// =============================================================================

/// `hash_many` over independent buffers, 1 to N threads.
#[cfg(feature = "multithread")]
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Batch-Scaling");
    group.sample_size(30);

    let count = 256;
    let size = 64 * KB;
    let owned: Vec<Vec<u8>> = (0..count).map(|_| random_input(size)).collect();
    let inputs: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();
    group.throughput(Throughput::Bytes((count * size) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}threads", threads)),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| sha256_engine::hash_many(black_box(&inputs))));
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_reference,
    bench_special_operations,
);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_batch_scaling);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
