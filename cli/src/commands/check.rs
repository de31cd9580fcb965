//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use super::hash::hash_file;
use super::BackendChoice;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

// =============================================================================
// CHECK
// =============================================================================

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &PathBuf, backend: BackendChoice) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let Some((expected_hash, file_path)) = line.split_once("  ") else {
            eprintln!("Warning: Invalid format: {}", line);
            continue;
        };
        let expected_hash = expected_hash.trim();
        let file_path = file_path.trim();
        total += 1;

        match hash_file(Path::new(file_path), backend) {
            Ok(actual_hash) if actual_hash.eq_ignore_ascii_case(expected_hash) => {
                println!("{}: OK", file_path);
            }
            Ok(_) => {
                println!("{}: FAILED", file_path);
                failed += 1;
            }
            Err(e) => {
                println!("{}: FAILED ({:#})", file_path, e);
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {} checksums verified", total);
    } else {
        eprintln!("WARNING: {} of {} checksums did NOT match", failed, total);
        std::process::exit(1);
    }

    Ok(())
}
