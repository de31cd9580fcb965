//! SHA-NI Kernel Module
//!
//! Block transform using the x86 SHA extensions (`sha256rnds2`, `sha256msg1`,
//! `sha256msg2`). Two rounds per `sha256rnds2`, state kept in two XMM
//! registers (ABEF / CDGH) for the whole batch.

// =============================================================================
// MODULES
// =============================================================================

mod compress;
mod state;

// =============================================================================
// EXPORTS
// =============================================================================

pub use compress::compress;

/// Runtime check for every feature `compress` is compiled with.
#[cfg(feature = "std")]
pub fn is_supported() -> bool {
    is_x86_feature_detected!("sha")
        && is_x86_feature_detected!("sse2")
        && is_x86_feature_detected!("ssse3")
        && is_x86_feature_detected!("sse4.1")
}

/// Compile-time check for every feature `compress` is compiled with.
#[cfg(not(feature = "std"))]
pub const fn is_supported() -> bool {
    cfg!(all(
        target_feature = "sha",
        target_feature = "sse2",
        target_feature = "ssse3",
        target_feature = "sse4.1"
    ))
}
