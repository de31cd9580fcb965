//! Backend Selection
//!
//! Maps the `--backend` flag onto an engine and lists what the CPU supports.

use anyhow::Result;
use clap::ValueEnum;
use sha256_engine::{Backend, Sha256Engine};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum BackendChoice {
    /// Fastest backend that passes the conformance check
    Auto,
    /// Pure integer implementation
    Portable,
    /// x86 SHA extensions
    ShaNi,
    /// AArch64 SHA2 crypto extension
    ArmSha2,
}

impl BackendChoice {
    /// Build an engine for this choice. Explicit backends never fall back.
    pub fn engine(self) -> Result<Sha256Engine> {
        let backend = match self {
            Self::Auto => return Ok(Sha256Engine::new()),
            Self::Portable => Backend::Portable,
            Self::ShaNi => Backend::ShaNi,
            Self::ArmSha2 => Backend::ArmSha2,
        };
        Ok(Sha256Engine::with_backend(backend)?)
    }
}

/// Print every backend with its availability, marking the selected one.
pub fn list_backends() {
    let selected = Backend::detect();

    for backend in Backend::ALL {
        let status = if backend == selected {
            "selected"
        } else if backend.is_available() {
            "available"
        } else {
            "unsupported"
        };
        println!("{:<12} {}", backend.name(), status);
    }
}
