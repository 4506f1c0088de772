#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4cli::container::{decode_container, decode_container_bytes, Lz4Block, HEADER_SIZE};

fuzz_target!(|data: &[u8]| {
    // Errors are expected; panics and over-long outputs are not.
    // Cap the declared size so the fuzzer doesn't OOM on huge headers.
    if data.len() >= HEADER_SIZE {
        let declared = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        if declared > 1 << 24 {
            return;
        }
    }

    if let Ok(out) = decode_container_bytes(data, &Lz4Block) {
        assert_eq!(out.data.len(), out.header.original_size as usize);
    }

    // Pipe semantics: compressed_size is advisory.
    let mut src = data;
    if let Ok(out) = decode_container(&mut src, None, "fuzz", &Lz4Block) {
        assert_eq!(out.data.len(), out.header.original_size as usize);
    }
});
