//! Shared types used across the engine.

use crate::kernels::constants::{BLOCK_SIZE, DIGEST_SIZE, STATE_WORDS};
use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// DATA MODEL
// =============================================================================

/// Running chaining value: eight 32-bit words.
pub type HashState = [u32; STATE_WORDS];

/// One compression unit.
pub type Block = [u8; BLOCK_SIZE];

/// Final 256-bit digest.
pub type Digest = [u8; DIGEST_SIZE];

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Unified compression signature: `(state, blocks)`.
///
/// `blocks.len()` is always a multiple of `BLOCK_SIZE`; blocks are applied in
/// order. The portable kernel and every accelerated kernel share this
/// signature so the dispatcher can swap them at runtime.
pub type CompressFn = fn(&mut HashState, &[u8]);

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for inputs whose bit length does not fit the 64-bit length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTooLarge {
    len: u64,
}

impl InputTooLarge {
    /// Create a new `InputTooLarge` for an input of `len` bytes.
    pub const fn new(len: u64) -> Self {
        Self { len }
    }

    /// Input length in bytes that was rejected.
    pub const fn input_len(&self) -> u64 {
        self.len
    }
}

impl fmt::Display for InputTooLarge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input of {} bytes is too large: bit length exceeds the 64-bit length field",
            self.len
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for InputTooLarge {}

/// Error for an accelerated backend the running CPU cannot execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatureError {
    missing: &'static str,
}

impl CpuFeatureError {
    /// Create a new `CpuFeatureError` describing the missing CPU feature.
    pub const fn new(missing: &'static str) -> Self {
        Self { missing }
    }

    /// Name of the missing CPU feature.
    pub const fn missing(&self) -> &'static str {
        self.missing
    }
}

impl fmt::Display for CpuFeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU feature '{}' required by the selected backend. \
             Use Backend::Portable on this machine",
            self.missing
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for CpuFeatureError {}
