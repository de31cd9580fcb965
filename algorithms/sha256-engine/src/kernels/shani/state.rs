//! SHA-NI State Layout
//!
//! `sha256rnds2` expects the eight state words split as ABEF / CDGH (high
//! lane first) instead of the natural ABCD / EFGH order.

#[cfg(target_arch = "x86")]
use core::arch::x86 as arch;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64 as arch;

use self::arch::{
    __m128i, _mm_alignr_epi8, _mm_blend_epi16, _mm_loadu_si128, _mm_shuffle_epi32,
    _mm_storeu_si128,
};
use crate::types::HashState;

// =============================================================================
// LOAD / STORE
// =============================================================================

/// Load `state` into the (ABEF, CDGH) register pair.
// SAFETY: Requires SSE2/SSSE3/SSE4.1 (enforced by the dispatcher). Unaligned
// loads from a borrowed `[u32; 8]`, which is exactly two 128-bit lanes.
#[target_feature(enable = "sse2,ssse3,sse4.1")]
#[allow(unsafe_code)]
#[allow(clippy::cast_ptr_alignment)]
pub unsafe fn load(state: &HashState) -> (__m128i, __m128i) {
    let ptr = state.as_ptr().cast::<__m128i>();
    let dcba = _mm_loadu_si128(ptr);
    let hgfe = _mm_loadu_si128(ptr.add(1));

    let cdab = _mm_shuffle_epi32(dcba, 0xB1);
    let efgh = _mm_shuffle_epi32(hgfe, 0x1B);
    let abef = _mm_alignr_epi8(cdab, efgh, 8);
    let cdgh = _mm_blend_epi16(efgh, cdab, 0xF0);
    (abef, cdgh)
}

/// Store the (ABEF, CDGH) register pair back into `state`.
// SAFETY: Requires SSE2/SSSE3/SSE4.1 (enforced by the dispatcher). Unaligned
// stores into a mutably borrowed `[u32; 8]`.
#[target_feature(enable = "sse2,ssse3,sse4.1")]
#[allow(unsafe_code)]
#[allow(clippy::cast_ptr_alignment)]
pub unsafe fn store(state: &mut HashState, abef: __m128i, cdgh: __m128i) {
    let feba = _mm_shuffle_epi32(abef, 0x1B);
    let dchg = _mm_shuffle_epi32(cdgh, 0xB1);
    let dcba = _mm_blend_epi16(feba, dchg, 0xF0);
    let hgfe = _mm_alignr_epi8(dchg, feba, 8);

    let ptr = state.as_mut_ptr().cast::<__m128i>();
    _mm_storeu_si128(ptr, dcba);
    _mm_storeu_si128(ptr.add(1), hgfe);
}
