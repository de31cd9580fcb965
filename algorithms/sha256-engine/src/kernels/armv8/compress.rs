//! ARMv8 Block Compression

use crate::kernels::constants::{BLOCK_SIZE, K256, ROUNDS};
use crate::types::HashState;

use core::arch::aarch64::{
    uint32x4_t, vaddq_u32, vld1q_u32, vld1q_u8, vreinterpretq_u32_u8, vrev32q_u8, vsha256h2q_u32,
    vsha256hq_u32, vsha256su0q_u32, vsha256su1q_u32, vst1q_u32,
};

/// Rounds handled per message vector.
const ROUNDS_PER_VEC: usize = 4;

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

/// Load 16 bytes as four big-endian words.
// SAFETY: Requires NEON. `ptr` points at 16 readable bytes.
#[inline]
#[target_feature(enable = "neon")]
#[allow(unsafe_code)]
unsafe fn load_be(ptr: *const u8) -> uint32x4_t {
    vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(ptr)))
}

/// Process one `BLOCK_SIZE` byte block (64 rounds) on the register pair.
// SAFETY: Requires SHA2/NEON. `ptr` points at `BLOCK_SIZE` readable bytes;
// every 4-word `K256` load at `4 * i` for `i < 16` is in bounds.
#[inline]
#[target_feature(enable = "sha2,neon")]
#[allow(unsafe_code)]
unsafe fn compress_block(abcd: &mut uint32x4_t, efgh: &mut uint32x4_t, ptr: *const u8) {
    let abcd_save = *abcd;
    let efgh_save = *efgh;

    let mut w: [uint32x4_t; 4] = [
        load_be(ptr),
        load_be(ptr.add(16)),
        load_be(ptr.add(32)),
        load_be(ptr.add(48)),
    ];

    for i in 0..ROUNDS / ROUNDS_PER_VEC {
        if i >= 4 {
            w[i % 4] = vsha256su1q_u32(
                vsha256su0q_u32(w[i % 4], w[(i + 1) % 4]),
                w[(i + 2) % 4],
                w[(i + 3) % 4],
            );
        }
        let wk = vaddq_u32(w[i % 4], vld1q_u32(K256.as_ptr().add(i * ROUNDS_PER_VEC)));
        let prev = *abcd;
        *abcd = vsha256hq_u32(prev, *efgh, wk);
        *efgh = vsha256h2q_u32(*efgh, prev, wk);
    }

    *abcd = vaddq_u32(*abcd, abcd_save);
    *efgh = vaddq_u32(*efgh, efgh_save);
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Apply every block of `blocks` to `state`, in order.
///
/// # Safety
/// The CPU must support the `sha2` crypto extension. `blocks.len()` must be a
/// multiple of `BLOCK_SIZE`.
#[target_feature(enable = "sha2,neon")]
#[allow(unsafe_code)]
pub unsafe fn compress(state: &mut HashState, blocks: &[u8]) {
    debug_assert!(blocks.len().is_multiple_of(BLOCK_SIZE));
    if blocks.is_empty() {
        return;
    }

    let mut abcd = vld1q_u32(state.as_ptr());
    let mut efgh = vld1q_u32(state.as_ptr().add(4));
    for block in blocks.chunks_exact(BLOCK_SIZE) {
        compress_block(&mut abcd, &mut efgh, block.as_ptr());
    }
    vst1q_u32(state.as_mut_ptr(), abcd);
    vst1q_u32(state.as_mut_ptr().add(4), efgh);
}
