//! Bytes-per-Cycle (bpC) Benchmark: SHA-256 Backends
//!
//! Measures raw block-transform efficiency per backend: blocks per second
//! from the wall clock, bytes per cycle from RDTSC on x86_64, and the
//! speedup over the portable kernel.

#![allow(missing_docs)]
#![allow(unsafe_code)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::unwrap_used)]

use sha256_engine::{kernels, Backend, CompressFn};
use std::hint::black_box;
use std::time::Instant;

const BLOCKS_PER_CALL: usize = 1024;
const CALLS: usize = 2_000;

// =============================================================================
// UTILITIES
// =============================================================================

#[cfg(target_arch = "x86_64")]
fn cycles() -> u64 {
    // SAFETY: RDTSC is unprivileged and present on every x86_64 CPU.
    unsafe { std::arch::x86_64::_rdtsc() }
}

#[cfg(not(target_arch = "x86_64"))]
const fn cycles() -> u64 {
    0
}

/// Cycles between two readings. Zero if the thread migrated to a core
/// whose TSC is behind.
const fn elapsed(start: u64, end: u64) -> u64 {
    end.saturating_sub(start)
}

/// Measure RDTSC overhead to subtract from measurements.
fn measure_overhead(iterations: u64) -> f64 {
    let start = cycles();
    for _ in 0..iterations {
        black_box(0);
    }
    let end = cycles();
    elapsed(start, end) as f64 / iterations as f64
}

// =============================================================================
// MEASUREMENT FUNCTIONS
// =============================================================================

#[derive(Clone, Copy)]
struct Sample {
    blocks_per_sec: f64,
    cycles_per_call: f64,
}

fn measure(compress: CompressFn, input: &[u8]) -> Sample {
    let mut state = kernels::constants::H0;

    // Warm-up
    for _ in 0..CALLS / 10 {
        compress(black_box(&mut state), black_box(input));
    }

    let wall = Instant::now();
    let start = cycles();
    for _ in 0..CALLS {
        compress(black_box(&mut state), black_box(input));
    }
    let end = cycles();
    let elapsed = wall.elapsed().as_secs_f64();
    black_box(state);

    Sample {
        blocks_per_sec: (CALLS * BLOCKS_PER_CALL) as f64 / elapsed,
        cycles_per_call: elapsed(start, end) as f64 / CALLS as f64,
    }
}

// =============================================================================
// MAIN BENCHMARK
// =============================================================================

fn main() {
    let input = vec![0xA5u8; BLOCKS_PER_CALL * kernels::constants::BLOCK_SIZE];
    let bytes_per_call = input.len() as f64;
    let overhead = measure_overhead(1_000_000);

    println!("BENCHMARK: Block Transform ({BLOCKS_PER_CALL} blocks per call)");
    println!("=================================================================");
    println!(
        "{:<12} | {:<16} | {:<12} | {:<12}",
        "Backend", "Blocks/s", "Bytes/Cycle", "Speedup"
    );
    println!("{:-<12}-+-{:-<16}-+-{:-<12}-+-{:-<12}", "", "", "", "");

    let baseline = measure(kernels::portable::compress, &input);

    for backend in Backend::ALL.into_iter().rev() {
        let Ok(compress) = backend.compressor() else {
            println!("{:<12} | {:<16} | {:<12} | {:<12}", backend.name(), "-", "-", "-");
            continue;
        };
        let sample = if backend == Backend::Portable {
            baseline
        } else {
            measure(compress, &input)
        };
        let bpc = if cfg!(target_arch = "x86_64") && sample.cycles_per_call > overhead {
            format!(
                "{:.3}",
                bytes_per_call / (sample.cycles_per_call - overhead).max(1.0)
            )
        } else {
            "n/a".to_owned()
        };

        println!(
            "{:<12} | {:<16.0} | {:<12} | {:<12.2}",
            backend.name(),
            sample.blocks_per_sec,
            bpc,
            sample.blocks_per_sec / baseline.blocks_per_sec
        );
    }
    println!("=================================================================");
    println!("* Bytes/Cycle from RDTSC (reference clock, not core clock).");
    println!("* Speedup relative to the portable kernel.");
}
