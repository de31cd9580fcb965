#![no_main]

use libfuzzer_sys::fuzz_target;
use sha2::Digest as _;
use sha256_engine::{Backend, Sha256Engine};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // REFERENCE
    // =============================================================================

    let expected: [u8; 32] = sha2::Sha256::digest(data).into();
    assert_eq!(sha256_engine::hash(data), expected, "hash() diverged from sha2");

    // =============================================================================
    // EVERY BACKEND
    // =============================================================================

    for backend in Backend::ALL.into_iter().filter(|b| b.is_available()) {
        let Ok(mut engine) = Sha256Engine::with_backend(backend) else {
            panic!("{backend} reported available but refused to start");
        };
        assert_eq!(
            engine.digest(data),
            Ok(expected),
            "{backend} diverged from sha2"
        );
    }
});
