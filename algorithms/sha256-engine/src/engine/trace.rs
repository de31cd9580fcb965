//! Backend selection tracing.
//!
//! Compiled to no-ops unless the `tracing` feature is enabled. Nothing here
//! runs per block.

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use super::dispatcher::Backend;

/// Trace a backend that feature detection ruled out.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_unavailable(backend: Backend) {
    debug!(
        target: "sha256_engine::dispatch",
        backend = backend.name(),
        "backend unavailable on this CPU"
    );
}

/// Trace a backend that feature detection ruled out - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_unavailable(_backend: Backend) {}

/// Trace a backend that was detected but produced a wrong known answer.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_nonconforming(backend: Backend) {
    warn!(
        target: "sha256_engine::dispatch",
        backend = backend.name(),
        "backend failed the conformance check, falling back"
    );
}

/// Trace a nonconforming backend - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_nonconforming(_backend: Backend) {}

/// Trace the backend chosen for this process.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_selected(backend: Backend) {
    debug!(
        target: "sha256_engine::dispatch",
        backend = backend.name(),
        "selected compression backend"
    );
}

/// Trace the chosen backend - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_selected(_backend: Backend) {}
