#![no_main]

use libfuzzer_sys::fuzz_target;
use sha256_engine::{Backend, Sha256Engine};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // Group size in blocks from the first byte (1 to 8)
    let group = (data[0] as usize % 8) + 1;
    let body = &data[1..];
    let body = &body[..body.len() - body.len() % 64];

    for backend in Backend::ALL.into_iter().filter(|b| b.is_available()) {
        let Ok(mut whole) = Sha256Engine::with_backend(backend) else {
            return;
        };
        let mut grouped = whole.clone();

        whole.compress_blocks(body);
        for chunk in body.chunks(group * 64) {
            grouped.compress_blocks(chunk);
        }

        assert_eq!(
            whole.state(),
            grouped.state(),
            "Block grouping changed the state on {backend}"
        );
    }
});
