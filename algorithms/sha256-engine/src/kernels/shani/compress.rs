//! SHA-NI Block Compression
//!
//! Processes a whole batch of 64-byte blocks per call; the state is loaded
//! once, threaded through every block in registers, and stored once.

#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_ptr_alignment)]

use super::state;
use crate::kernels::constants::{BLOCK_SIZE, K256, ROUNDS};
use crate::types::HashState;

#[cfg(target_arch = "x86")]
use core::arch::x86 as arch;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64 as arch;

use self::arch::{
    __m128i, _mm_add_epi32, _mm_alignr_epi8, _mm_loadu_si128, _mm_set_epi64x, _mm_sha256msg1_epu32,
    _mm_sha256msg2_epu32, _mm_sha256rnds2_epu32, _mm_shuffle_epi32, _mm_shuffle_epi8,
};

/// Rounds handled per message vector.
const ROUNDS_PER_VEC: usize = 4;

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

/// Next four schedule words from the previous sixteen.
// SAFETY: Requires SHA/SSSE3 CPU features. Register-only arithmetic.
#[inline]
#[target_feature(enable = "sha,sse2,ssse3")]
#[allow(unsafe_code)]
unsafe fn schedule(w0: __m128i, w1: __m128i, w2: __m128i, w3: __m128i) -> __m128i {
    let t = _mm_add_epi32(_mm_sha256msg1_epu32(w0, w1), _mm_alignr_epi8(w3, w2, 4));
    _mm_sha256msg2_epu32(t, w3)
}

/// Process one `BLOCK_SIZE` byte block (64 rounds) on the register pair.
// SAFETY: Requires SHA/SSE2/SSSE3/SSE4.1 CPU features. `ptr` points at
// `BLOCK_SIZE` readable bytes (caller iterates `chunks_exact`). `K256` holds
// `ROUNDS` words, so every 4-word load at `4 * i` for `i < 16` is in bounds.
#[inline]
#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
#[allow(unsafe_code)]
unsafe fn compress_block(abef: &mut __m128i, cdgh: &mut __m128i, ptr: *const u8) {
    // Big-endian word load: reverse bytes within each 32-bit lane.
    let bswap = _mm_set_epi64x(
        0x0c0d_0e0f_0809_0a0b_u64 as i64,
        0x0405_0607_0001_0203_u64 as i64,
    );

    let abef_save = *abef;
    let cdgh_save = *cdgh;

    let mut w: [__m128i; 4] = [
        _mm_shuffle_epi8(_mm_loadu_si128(ptr.cast()), bswap),
        _mm_shuffle_epi8(_mm_loadu_si128(ptr.add(16).cast()), bswap),
        _mm_shuffle_epi8(_mm_loadu_si128(ptr.add(32).cast()), bswap),
        _mm_shuffle_epi8(_mm_loadu_si128(ptr.add(48).cast()), bswap),
    ];

    for i in 0..ROUNDS / ROUNDS_PER_VEC {
        if i >= 4 {
            w[i % 4] = schedule(w[i % 4], w[(i + 1) % 4], w[(i + 2) % 4], w[(i + 3) % 4]);
        }
        let k = _mm_loadu_si128(K256.as_ptr().add(i * ROUNDS_PER_VEC).cast());
        let msg = _mm_add_epi32(w[i % 4], k);
        *cdgh = _mm_sha256rnds2_epu32(*cdgh, *abef, msg);
        *abef = _mm_sha256rnds2_epu32(*abef, *cdgh, _mm_shuffle_epi32(msg, 0x0E));
    }

    *abef = _mm_add_epi32(*abef, abef_save);
    *cdgh = _mm_add_epi32(*cdgh, cdgh_save);
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Apply every block of `blocks` to `state`, in order.
///
/// # Safety
/// The CPU must support SHA, SSE2, SSSE3 and SSE4.1. `blocks.len()` must be a
/// multiple of `BLOCK_SIZE`.
#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
#[allow(unsafe_code)]
pub unsafe fn compress(state: &mut HashState, blocks: &[u8]) {
    debug_assert!(blocks.len().is_multiple_of(BLOCK_SIZE));
    if blocks.is_empty() {
        return;
    }

    let (mut abef, mut cdgh) = state::load(state);
    for block in blocks.chunks_exact(BLOCK_SIZE) {
        compress_block(&mut abef, &mut cdgh, block.as_ptr());
    }
    state::store(state, abef, cdgh);
}
