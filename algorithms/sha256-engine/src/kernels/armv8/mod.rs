//! ARMv8 SHA2 Kernel Module
//!
//! Block transform using the AArch64 crypto extension (`SHA256H`, `SHA256H2`,
//! `SHA256SU0`, `SHA256SU1`). State stays in two vector registers (ABCD /
//! EFGH) for the whole batch.

mod compress;

pub use compress::compress;

/// Runtime check for the `sha2` feature `compress` is compiled with.
#[cfg(feature = "std")]
pub fn is_supported() -> bool {
    std::arch::is_aarch64_feature_detected!("sha2")
}

/// Compile-time check for the `sha2` feature `compress` is compiled with.
#[cfg(not(feature = "std"))]
pub const fn is_supported() -> bool {
    cfg!(target_feature = "sha2")
}
