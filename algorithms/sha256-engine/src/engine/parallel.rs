//! Parallel Execution Engine
//!
//! Digests many independent buffers. Every buffer gets its own chaining
//! state; workers share nothing but the read-only constant tables.
//! Work is spread with Rayon if the `multithread` feature is enabled,
//! otherwise it runs serially in the same order.

use super::hasher;
use crate::kernels::constants::H0;
use crate::types::{CompressFn, Digest, InputTooLarge};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// BATCH DIGEST
// =============================================================================

/// Digest every input with `compress`. Output order matches input order.
///
/// # Errors
/// Returns the first `InputTooLarge` (in input order) if any input is too large.
pub fn digest_all(inputs: &[&[u8]], compress: CompressFn) -> Result<Vec<Digest>, InputTooLarge> {
    inputs
        .process_each(|input| {
            let mut state = H0;
            hasher::run(compress, &mut state, input)
        })
        .into_iter()
        .collect()
}

/// Helper for feature-agnostic batch processing
trait BatchProcessor {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&[u8]) -> R + Sync + Send,
        R: Send;
}

impl BatchProcessor for &[&[u8]] {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&[u8]) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().map(|input| f(input)).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().map(|input| f(input)).collect()
        }
    }
}
