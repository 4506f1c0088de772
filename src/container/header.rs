//! The 8-byte container header.
//!
//! ```text
//! offset 0..3  : compressed_size   (u32, little-endian)
//! offset 4..7  : original_size     (u32, little-endian)
//! offset 8..N  : payload, length == compressed_size
//! ```

use std::io::{self, Read, Write};

use crate::container::error::ContainerError;

/// Byte length of the header.
pub const HEADER_SIZE: usize = 8;

/// Parsed container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Payload length in bytes.
    pub compressed_size: u32,
    /// Decoded length in bytes; bounds the destination allocation.
    pub original_size: u32,
}

impl ContainerHeader {
    /// Decodes both fields from one 8-byte block.
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        let [c0, c1, c2, c3, o0, o1, o2, o3] = *bytes;
        ContainerHeader {
            compressed_size: u32::from_le_bytes([c0, c1, c2, c3]),
            original_size: u32::from_le_bytes([o0, o1, o2, o3]),
        }
    }

    /// Encodes the header in wire order.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[..4].copy_from_slice(&self.compressed_size.to_le_bytes());
        out[4..].copy_from_slice(&self.original_size.to_le_bytes());
        out
    }

    /// Reads exactly [`HEADER_SIZE`] bytes from `src`.
    ///
    /// A stream ending early yields [`ContainerError::TruncatedHeader`] with
    /// the number of bytes that were available. `path` only labels I/O errors.
    pub fn read_from<R: Read + ?Sized>(src: &mut R, path: &str) -> Result<Self, ContainerError> {
        let mut buf = [0u8; HEADER_SIZE];
        let got = read_full(src, &mut buf).map_err(|e| ContainerError::io(path, e))?;
        if got < HEADER_SIZE {
            return Err(ContainerError::TruncatedHeader { got });
        }
        Ok(Self::from_bytes(&buf))
    }

    pub fn write_to<W: Write + ?Sized>(&self, dst: &mut W) -> io::Result<()> {
        dst.write_all(&self.to_bytes())
    }
}

/// Fills `buf` from `src` until it is full or the stream ends.
///
/// Returns the number of bytes read; less than `buf.len()` only at EOF.
/// Interrupted reads are retried.
pub(crate) fn read_full<R: Read + ?Sized>(src: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match src.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
