//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon.

use super::BackendChoice;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Digest one file's full contents as lowercase hex.
pub fn hash_file(path: &Path, backend: BackendChoice) -> Result<String> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;

    let mut engine = backend.engine()?;
    let digest = engine.digest(&data)?;
    debug!(
        path = %path.display(),
        bytes = data.len(),
        backend = engine.backend().name(),
        "hashed file"
    );

    Ok(hex::encode(digest))
}

/// Hash files (Rayon parallelizes automatically when beneficial).
pub fn hash_files(files: &[PathBuf], backend: BackendChoice) -> Result<()> {
    // Indexed collect keeps the original order.
    let results: Vec<Result<String>> = files
        .par_iter()
        .map(|file_path| hash_file(file_path, backend))
        .collect();

    let mut errors = 0;
    for (file_path, result) in files.iter().zip(results) {
        match result {
            Ok(hex_hash) => println!("{}  {}", hex_hash, file_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {:#}", file_path.display(), e);
                errors += 1;
            }
        }
    }

    if errors > 0 {
        anyhow::bail!("Failed to hash {} file(s)", errors);
    }

    Ok(())
}
