#![cfg_attr(not(feature = "std"), no_std)]

//! # sha256-engine
//!
//! SHA-256 compression engine with a portable kernel and hardware kernels
//! (x86 SHA-NI, ARMv8 SHA2) selected once at runtime after a conformance check.

//! # Usage
//! ```rust
//! use sha256_engine::{Backend, Sha256Engine};
//!
//! // 1. One-shot
//! let digest = sha256_engine::hash(b"abc");
//! assert_eq!(
//!     sha256_engine::to_hex(&digest),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! // 2. Engine with an explicit backend
//! let mut engine = Sha256Engine::with_backend(Backend::Portable)?;
//! assert_eq!(engine.digest(b"abc")?, digest);
//!
//! // 3. Reuse after reset
//! engine.reset();
//! assert_eq!(engine.digest(b"abc")?, digest);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod oneshot;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use engine::padding::block_count;
pub use engine::{Backend, Sha256Engine};
pub use oneshot::{hash, hash_many, try_hash, verify};
#[cfg(feature = "std")]
pub use oneshot::{hash_hex, to_hex};
pub use types::{Block, CompressFn, CpuFeatureError, Digest, HashState, InputTooLarge};

/// Returns the name of the hardware backend currently in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
