use bolero::check;
use sha2::Digest as _;
use sha256_engine::{hash, hash_many, Backend, Sha256Engine};

#[test]
fn fuzz_reference_conformance() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let expected: [u8; 32] = sha2::Sha256::digest(data).into();
        assert_eq!(hash(data), expected, "hash() diverged from reference");
    });
}

#[test]
fn fuzz_backend_conformance() {
    let backends: Vec<Backend> = Backend::ALL
        .into_iter()
        .filter(|b| b.is_available())
        .collect();

    check!().with_type::<Vec<u8>>().for_each(|data| {
        let mut portable = Sha256Engine::with_backend(Backend::Portable).unwrap();
        let expected = portable.digest(data).unwrap();

        for &backend in &backends {
            let mut engine = Sha256Engine::with_backend(backend).unwrap();
            assert_eq!(
                engine.digest(data).unwrap(),
                expected,
                "{backend} diverged from portable"
            );
        }
    });
}

#[test]
fn fuzz_batch_matches_single() {
    check!().with_type::<(Vec<u8>, Vec<u8>)>().for_each(|(a, b)| {
        let batch = hash_many(&[a.as_slice(), b.as_slice()]);
        assert_eq!(batch, vec![hash(a), hash(b)]);
    });
}
