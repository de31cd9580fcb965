//! Kernel Collection
//!
//! Block-transform implementations of SHA-256. All share the `CompressFn`
//! shape `(state, blocks)` and must be bit-identical to `portable`.

#[cfg(target_arch = "aarch64")]
pub mod armv8;
pub mod constants;
pub mod portable;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod shani;
