// Integration tests for the 8-byte container header (src/container/header.rs).

use lz4cli::container::{ContainerError, ContainerHeader, HEADER_SIZE};

#[test]
fn header_is_little_endian() {
    let header = ContainerHeader {
        compressed_size: 0x0102_0304,
        original_size: 0x0A0B_0C0D,
    };
    assert_eq!(
        header.to_bytes(),
        [0x04, 0x03, 0x02, 0x01, 0x0D, 0x0C, 0x0B, 0x0A]
    );
}

#[test]
fn parses_known_bytes() {
    let bytes = [12, 0, 0, 0, 11, 0, 0, 0];
    let header = ContainerHeader::from_bytes(&bytes);
    assert_eq!(header.compressed_size, 12);
    assert_eq!(header.original_size, 11);
}

#[test]
fn read_from_consumes_exactly_eight_bytes() {
    let stream = [1u8, 0, 0, 0, 2, 0, 0, 0, 0xAA, 0xBB];
    let mut src = &stream[..];
    let header = ContainerHeader::read_from(&mut src, "mem").unwrap();
    assert_eq!(header.compressed_size, 1);
    assert_eq!(header.original_size, 2);
    assert_eq!(src, &[0xAA, 0xBB]);
}

#[test]
fn short_stream_reports_available_bytes() {
    for len in 0..HEADER_SIZE {
        let stream = vec![0u8; len];
        let err = ContainerHeader::read_from(&mut &stream[..], "mem").unwrap_err();
        match err {
            ContainerError::TruncatedHeader { got } => assert_eq!(got, len),
            other => panic!("expected TruncatedHeader, got {other:?}"),
        }
    }
}

#[test]
fn max_sizes_survive_write_and_read() {
    let header = ContainerHeader {
        compressed_size: u32::MAX,
        original_size: u32::MAX,
    };
    let mut buf = Vec::new();
    header.write_to(&mut buf).unwrap();
    assert_eq!(buf.len(), HEADER_SIZE);
    assert_eq!(ContainerHeader::read_from(&mut &buf[..], "mem").unwrap(), header);
}
