//! Execution Engine
//!
//! Digest state machine, padding, CPU dispatch and batch processing.

pub mod dispatcher;
pub mod hasher;
pub mod padding;
pub mod parallel;
mod trace;

pub use dispatcher::{get_active_backend_name, Backend};
pub use hasher::Sha256Engine;
