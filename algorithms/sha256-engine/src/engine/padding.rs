//! Padding & Finalization
//!
//! Turns the trailing `< BLOCK_SIZE` bytes of a message into the one or two
//! final blocks: data, `0x80`, zero fill, 64-bit big-endian bit length.

use crate::kernels::constants::{BLOCK_SIZE, LENGTH_FIELD_SIZE, MAX_SINGLE_TAIL, PAD_MARKER};
use crate::types::InputTooLarge;

/// Byte length whose bit count is the largest the length field can hold.
const MAX_INPUT_LEN: u64 = u64::MAX / 8;

// =============================================================================
// LENGTH FIELD
// =============================================================================

/// Bit length of a `len`-byte message.
///
/// # Errors
/// Returns `InputTooLarge` if `len * 8` overflows 64 bits.
pub const fn bit_length(len: u64) -> Result<u64, InputTooLarge> {
    if len > MAX_INPUT_LEN {
        return Err(InputTooLarge::new(len));
    }
    Ok(len * 8)
}

/// Total number of compressions for a `len`-byte message: `ceil((len + 9) / 64)`.
#[allow(clippy::cast_possible_truncation)]
pub const fn block_count(len: u64) -> u64 {
    len / BLOCK_SIZE as u64 + tail_blocks((len % BLOCK_SIZE as u64) as usize) as u64
}

/// Number of final blocks produced for a remainder of `rem` bytes.
const fn tail_blocks(rem: usize) -> usize {
    if rem <= MAX_SINGLE_TAIL {
        1
    } else {
        2
    }
}

// =============================================================================
// TAIL
// =============================================================================

/// The padded final block(s) of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tail {
    buf: [u8; 2 * BLOCK_SIZE],
    len: usize,
}

impl Tail {
    /// Padded bytes: exactly one or two blocks.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of blocks in the tail (1 or 2).
    pub const fn blocks(&self) -> usize {
        self.len / BLOCK_SIZE
    }
}

/// Pad the trailing `remainder` of a message of `total_len` bytes.
///
/// `remainder` must be shorter than `BLOCK_SIZE`; full blocks are compressed
/// directly by the caller.
///
/// # Errors
/// Returns `InputTooLarge` if `total_len * 8` overflows 64 bits.
pub fn pad(remainder: &[u8], total_len: u64) -> Result<Tail, InputTooLarge> {
    debug_assert!(remainder.len() < BLOCK_SIZE);
    let bits = bit_length(total_len)?;

    let rem = remainder.len();
    let len = tail_blocks(rem) * BLOCK_SIZE;

    let mut buf = [0u8; 2 * BLOCK_SIZE];
    buf[..rem].copy_from_slice(remainder);
    buf[rem] = PAD_MARKER;
    buf[len - LENGTH_FIELD_SIZE..len].copy_from_slice(&bits.to_be_bytes());

    Ok(Tail { buf, len })
}
