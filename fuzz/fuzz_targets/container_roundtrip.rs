#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4cli::container::{decode_container_bytes, encode_container, Lz4Block};

fuzz_target!(|data: &[u8]| {
    let packed = encode_container(data, &Lz4Block).expect("fuzz inputs fit in u32");
    let back = decode_container_bytes(&packed, &Lz4Block).expect("own output must decode");
    assert_eq!(back.data, data);
});
