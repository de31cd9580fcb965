//! Backend Comparison Benchmark
//!
//! Raw block-transform rate of each backend the CPU supports, bypassing the
//! dispatcher, plus the dispatched one-shot path.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use sha256_engine::{kernels, Backend};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_block_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block Transform");

    // Scenarios:
    // - 1 block: per-call overhead (state load/store)
    // - 64 blocks: L1 cache hot-path
    // - 4096 blocks: sustained rate
    let counts = [1usize, 64, 4096];

    for blocks in counts {
        let input = vec![0x5Au8; blocks * kernels::constants::BLOCK_SIZE];
        group.throughput(Throughput::Elements(blocks as u64));

        for backend in Backend::ALL.into_iter().filter(|b| b.is_available()) {
            let compress = backend.compressor().unwrap();
            group.bench_function(format!("{backend} - {blocks} blocks"), |b| {
                let mut state = kernels::constants::H0;
                b.iter(|| compress(black_box(&mut state), black_box(&input)));
            });
        }
    }
    group.finish();
}

fn bench_dispatched(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dispatched Digest");

    // Small (3B): one tail block, dominated by call overhead
    // Large (256KB): body loop on the selected kernel
    for size in [3usize, 256 * 1024] {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(
            format!("{} (Default) - {size} bytes", sha256_engine::active_backend()),
            |b| b.iter(|| sha256_engine::hash(black_box(&input))),
        );
        let mut portable = sha256_engine::Sha256Engine::with_backend(Backend::Portable).unwrap();
        group.bench_function(format!("Portable - {size} bytes"), |b| {
            b.iter(|| {
                portable.reset();
                portable.digest(black_box(&input)).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_block_rate, bench_dispatched);
criterion_main!(benches);
