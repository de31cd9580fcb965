//! Portable implementation of the SHA-256 block transform.
//!
//! Pure integer arithmetic, no intrinsics. This is the reference every
//! accelerated kernel is checked against.

use self::utils::{big_sigma0, big_sigma1, ch, load_words, maj, small_sigma0, small_sigma1};
use crate::kernels::constants::{BLOCK_SIZE, K256, ROUNDS};
use crate::types::HashState;

mod utils;

// =============================================================================
// LOGIC
// =============================================================================

/// Expand 16 message words into the 64-word schedule.
fn expand_schedule(block: &[u8]) -> [u32; ROUNDS] {
    let head = load_words(block);
    let mut w = [0u32; ROUNDS];
    w[..16].copy_from_slice(&head);
    for i in 16..ROUNDS {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }
    w
}

/// Compress a single `BLOCK_SIZE` byte block into the state.
#[allow(clippy::many_single_char_names)]
fn compress_block(state: &mut HashState, block: &[u8]) {
    let w = expand_schedule(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (&k, &wi) in K256.iter().zip(w.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(wi);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Apply every block of `blocks` to `state`, in order.
///
/// `blocks.len()` must be a multiple of `BLOCK_SIZE`.
pub fn compress(state: &mut HashState, blocks: &[u8]) {
    debug_assert!(blocks.len().is_multiple_of(BLOCK_SIZE));
    for block in blocks.chunks_exact(BLOCK_SIZE) {
        compress_block(state, block);
    }
}
