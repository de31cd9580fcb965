//! Hardware Dispatcher
//!
//! Selects the block-transform kernel (SHA-NI, ARMv8 SHA2, or portable) for
//! the current CPU. An accelerated kernel is only trusted after it reproduces
//! the portable kernel's known answers; selection runs once per process.

use super::{hasher, trace};
use crate::kernels;
use crate::kernels::constants::{ABC_DIGEST, EMPTY_DIGEST, H0, TWO_BLOCK_DIGEST, TWO_BLOCK_MESSAGE};
use crate::types::{CompressFn, CpuFeatureError};

#[cfg(not(feature = "std"))]
use core::sync::atomic::{AtomicU8, Ordering};
#[cfg(feature = "std")]
use std::sync::OnceLock;

// =============================================================================
// BACKENDS
// =============================================================================

/// Block-transform implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Pure integer implementation, available everywhere.
    Portable,
    /// x86 SHA extensions (`sha`, `sse2`, `ssse3`, `sse4.1`).
    ShaNi,
    /// AArch64 crypto extension (`sha2`).
    ArmSha2,
}

impl Backend {
    /// Every backend, in the order the dispatcher prefers them (last resort last).
    pub const ALL: [Self; 3] = [Self::ShaNi, Self::ArmSha2, Self::Portable];

    /// Human-readable backend name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Portable => "Portable",
            Self::ShaNi => "SHA-NI",
            Self::ArmSha2 => "ARMv8 SHA2",
        }
    }

    /// Whether the running CPU can execute this backend.
    #[must_use]
    pub fn is_available(self) -> bool {
        match self {
            Self::Portable => true,
            Self::ShaNi => shani_supported(),
            Self::ArmSha2 => armv8_supported(),
        }
    }

    /// The compression function for this backend.
    ///
    /// # Errors
    /// Returns `CpuFeatureError` if the running CPU lacks the backend's
    /// instructions.
    pub fn compressor(self) -> Result<CompressFn, CpuFeatureError> {
        match self {
            Self::Portable => Ok(kernels::portable::compress),
            Self::ShaNi if shani_supported() => Ok(safe_shani_wrapper),
            Self::ShaNi => Err(CpuFeatureError::new("sha")),
            Self::ArmSha2 if armv8_supported() => Ok(safe_armv8_wrapper),
            Self::ArmSha2 => Err(CpuFeatureError::new("sha2")),
        }
    }

    /// The backend this process uses by default.
    #[must_use]
    pub fn detect() -> Self {
        best_backend()
    }

    /// Non-zero tag for the `no_std` selection cache.
    #[cfg(not(feature = "std"))]
    const fn tag(self) -> u8 {
        match self {
            Self::Portable => 1,
            Self::ShaNi => 2,
            Self::ArmSha2 => 3,
        }
    }

    #[cfg(not(feature = "std"))]
    const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Self::Portable),
            2 => Some(Self::ShaNi),
            3 => Some(Self::ArmSha2),
            _ => None,
        }
    }
}

impl core::fmt::Display for Backend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// DISPATCHER
// =============================================================================

#[cfg(feature = "std")]
static SELECTED: OnceLock<Backend> = OnceLock::new();

/// 0 until the first selection, then `Backend::tag`.
#[cfg(not(feature = "std"))]
static SELECTED: AtomicU8 = AtomicU8::new(0);

#[cfg(test)]
static SELECT_RUNS: core::sync::atomic::AtomicUsize = core::sync::atomic::AtomicUsize::new(0);

/// Returns the fastest conforming backend for this CPU.
#[must_use]
pub fn best_backend() -> Backend {
    #[cfg(feature = "std")]
    {
        *SELECTED.get_or_init(select)
    }
    #[cfg(not(feature = "std"))]
    {
        if let Some(backend) = Backend::from_tag(SELECTED.load(Ordering::Acquire)) {
            return backend;
        }
        // Racing first callers may both select; the verdict is identical.
        let backend = select();
        SELECTED.store(backend.tag(), Ordering::Release);
        backend
    }
}

/// Compression function for a backend the dispatcher already vetted.
pub(crate) fn compressor_for(backend: Backend) -> CompressFn {
    backend.compressor().unwrap_or(kernels::portable::compress)
}

/// Returns the name of the active backend.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    best_backend().name()
}

fn select() -> Backend {
    #[cfg(test)]
    SELECT_RUNS.fetch_add(1, core::sync::atomic::Ordering::Relaxed);

    for backend in Backend::ALL {
        if backend == Backend::Portable {
            break;
        }
        let Ok(compress) = backend.compressor() else {
            trace::trace_unavailable(backend);
            continue;
        };
        if conforms(compress) {
            trace::trace_selected(backend);
            return backend;
        }
        trace::trace_nonconforming(backend);
    }
    trace::trace_selected(Backend::Portable);
    Backend::Portable
}

// =============================================================================
// CONFORMANCE
// =============================================================================

/// Whether `compress` reproduces the reference digests.
///
/// Covers the single-block tail, a two-block tail and a full body block, and
/// compares raw states against the portable kernel as well.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn conforms(compress: CompressFn) -> bool {
    let known: [(&[u8], [u8; 32]); 3] = [
        (b"", EMPTY_DIGEST),
        (b"abc", ABC_DIGEST),
        (TWO_BLOCK_MESSAGE, TWO_BLOCK_DIGEST),
    ];
    for (input, expected) in known {
        let mut state = H0;
        if hasher::run(compress, &mut state, input) != Ok(expected) {
            return false;
        }
    }

    let mut body = [0u8; 3 * 64];
    for (i, b) in body.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(31).wrapping_add(7);
    }
    let mut candidate = H0;
    let mut reference = H0;
    compress(&mut candidate, &body);
    kernels::portable::compress(&mut reference, &body);
    candidate == reference
}

// =============================================================================
// CAPABILITY CHECKS
// =============================================================================

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn shani_supported() -> bool {
    kernels::shani::is_supported()
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
const fn shani_supported() -> bool {
    false
}

#[cfg(target_arch = "aarch64")]
fn armv8_supported() -> bool {
    kernels::armv8::is_supported()
}

#[cfg(not(target_arch = "aarch64"))]
const fn armv8_supported() -> bool {
    false
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// SHA-NI wrapper.
#[inline]
#[allow(unsafe_code)]
#[allow(unused_variables)]
#[allow(dead_code)]
fn safe_shani_wrapper(state: &mut crate::types::HashState, blocks: &[u8]) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    // SAFETY: Only handed out by `Backend::compressor` after CPUID validation
    // (SHA/SSE2/SSSE3/SSE4.1). Block length is validated by every caller.
    unsafe {
        kernels::shani::compress(state, blocks);
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    unreachable!("CPUID escape");
}

/// ARMv8 SHA2 wrapper.
#[inline]
#[allow(unsafe_code)]
#[allow(unused_variables)]
#[allow(dead_code)]
fn safe_armv8_wrapper(state: &mut crate::types::HashState, blocks: &[u8]) {
    #[cfg(target_arch = "aarch64")]
    // SAFETY: Only handed out by `Backend::compressor` after HWCAP validation
    // (SHA2). Block length is validated by every caller.
    unsafe {
        kernels::armv8::compress(state, blocks);
    }
    #[cfg(not(target_arch = "aarch64"))]
    unreachable!("HWCAP escape");
}
