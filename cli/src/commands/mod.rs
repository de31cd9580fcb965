//! CLI Commands
//!
//! All sha256-engine CLI commands organized as separate modules.

mod backends;
mod check;
mod hash;

pub use backends::{list_backends, BackendChoice};
pub use check::check_mode;
pub use hash::hash_files;
