//! Digest Engine
//!
//! Owns one chaining state and one compression strategy. Blocks are applied
//! strictly in order; independent engines share nothing mutable.

use super::dispatcher::{self, Backend};
use super::padding;
use crate::kernels::constants::{BLOCK_SIZE, H0};
use crate::types::{Block, CompressFn, CpuFeatureError, Digest, HashState, InputTooLarge};

// =============================================================================
// CORE
// =============================================================================

/// Digest `data` starting from `state` with the given kernel.
///
/// The length is validated before `state` is touched, so a rejected input
/// leaves the state unchanged.
pub(crate) fn run(
    compress: CompressFn,
    state: &mut HashState,
    data: &[u8],
) -> Result<Digest, InputTooLarge> {
    let total_len = u64::try_from(data.len()).map_err(|_| InputTooLarge::new(u64::MAX))?;
    padding::bit_length(total_len)?;

    let full = data.len() - data.len() % BLOCK_SIZE;
    let (body, remainder) = data.split_at(full);
    compress(state, body);

    let tail = padding::pad(remainder, total_len)?;
    debug_assert_eq!(
        (full / BLOCK_SIZE + tail.blocks()) as u64,
        padding::block_count(total_len)
    );
    compress(state, tail.as_bytes());

    Ok(serialize(state))
}

/// Serialize the chaining state big-endian.
fn serialize(state: &HashState) -> Digest {
    let mut out = [0u8; 32];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

// =============================================================================
// ENGINE
// =============================================================================

/// SHA-256 digest engine.
///
/// ```text
/// new() ──► ready ──► compress_block / digest ──► ready
///             ▲                                    │
///             └──────────────── reset() ◄──────────┘
/// ```
///
/// `digest` continues from the current state, so call [`reset`](Self::reset)
/// between independent messages.
#[derive(Clone)]
pub struct Sha256Engine {
    state: HashState,
    compress: CompressFn,
    backend: Backend,
}

impl Sha256Engine {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create an engine on the best conforming backend for this CPU.
    pub fn new() -> Self {
        let backend = dispatcher::best_backend();
        Self {
            state: H0,
            compress: dispatcher::compressor_for(backend),
            backend,
        }
    }

    /// Create an engine on an explicit backend.
    ///
    /// # Errors
    /// Returns `CpuFeatureError` if the backend cannot run on this CPU. The
    /// engine never substitutes another backend.
    pub fn with_backend(backend: Backend) -> Result<Self, CpuFeatureError> {
        Ok(Self {
            state: H0,
            compress: backend.compressor()?,
            backend,
        })
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Restore the standard initial hash value.
    pub const fn reset(&mut self) {
        self.state = H0;
    }

    /// Apply one compression to the current state.
    pub fn compress_block(&mut self, block: &Block) {
        (self.compress)(&mut self.state, block.as_slice());
    }

    /// Apply a run of whole blocks to the current state, in order.
    ///
    /// # Panics
    /// Panics if `blocks.len()` is not a multiple of `BLOCK_SIZE`.
    pub fn compress_blocks(&mut self, blocks: &[u8]) {
        assert!(
            blocks.len().is_multiple_of(BLOCK_SIZE),
            "compress_blocks needs whole {BLOCK_SIZE}-byte blocks, got {} bytes",
            blocks.len()
        );
        (self.compress)(&mut self.state, blocks);
    }

    /// Pad `data`, compress every resulting block, and return the digest.
    ///
    /// The length field encodes `data.len() * 8`. Afterwards the state holds
    /// the final chaining value.
    ///
    /// # Errors
    /// Returns `InputTooLarge` if `data.len() * 8` overflows 64 bits; the
    /// state is left unchanged in that case.
    pub fn digest(&mut self, data: &[u8]) -> Result<Digest, InputTooLarge> {
        run(self.compress, &mut self.state, data)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Current chaining value.
    pub const fn state(&self) -> &HashState {
        &self.state
    }

    /// Backend this engine compresses with.
    pub const fn backend(&self) -> Backend {
        self.backend
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for Sha256Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Sha256Engine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sha256Engine")
            .field("state", &self.state)
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}
