//! SHA-256 Engine Basic Example
//!
//! Minimal usage: `let digest = sha256_engine::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

use sha256_engine::{Backend, Sha256Engine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let digest = sha256_engine::hash(data);

    println!("Data:    {:?}", String::from_utf8_lossy(data));
    println!("Digest:  {}", hex::encode(digest));
    println!("Backend: {}", sha256_engine::active_backend());

    // Same message on the portable kernel:
    let mut engine = Sha256Engine::with_backend(Backend::Portable)?;
    assert_eq!(engine.digest(data)?, digest);
    println!("Portable kernel agrees.");

    Ok(())
}
