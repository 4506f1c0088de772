//! Reading a container: header, length validation, exact-size decode.
//!
//! [`decode_container`] runs the whole read side for one stream:
//!
//! 1. read the 8-byte header (short stream → truncated-header error);
//! 2. read the payload; when the total stream length is known (seekable
//!    source) the payload length must equal `compressed_size`, otherwise
//!    `compressed_size` is advisory and the payload runs to end of stream;
//! 3. reject an `original_size` larger than the payload could ever expand
//!    to, then reserve exactly `original_size` bytes, failing cleanly if the
//!    reservation is refused;
//! 4. hand payload and destination to the block primitive and require it to
//!    fill the destination completely.
//!
//! `original_size == 0` yields an empty buffer without calling the primitive.

use std::io::Read;

use crate::container::codec::BlockDecoder;
use crate::container::error::ContainerError;
use crate::container::header::{ContainerHeader, HEADER_SIZE};

/// Upper bound on LZ4 block expansion: one length byte adds at most 255
/// output bytes.
pub const MAX_EXPANSION: u64 = 255;

/// Outcome of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub header: ContainerHeader,
    /// Exactly `header.original_size` bytes.
    pub data: Vec<u8>,
}

/// Decodes one container from `src`.
///
/// `stream_len` is the total length of the stream including the header when
/// it is known in advance (regular files); pass `None` for pipes. `path`
/// only labels error messages.
pub fn decode_container<R, D>(
    src: &mut R,
    stream_len: Option<u64>,
    path: &str,
    decoder: &D,
) -> Result<Decoded, ContainerError>
where
    R: Read + ?Sized,
    D: BlockDecoder + ?Sized,
{
    let header = ContainerHeader::read_from(src, path)?;
    let payload = read_payload(src, stream_len, &header, path)?;
    let data = decode_payload(&payload, &header, decoder)?;
    Ok(Decoded { header, data })
}

/// Decodes a container held entirely in memory. The slice length is the
/// stream length, so the size check applies.
pub fn decode_container_bytes<D>(bytes: &[u8], decoder: &D) -> Result<Decoded, ContainerError>
where
    D: BlockDecoder + ?Sized,
{
    let mut src = bytes;
    decode_container(&mut src, Some(bytes.len() as u64), "<memory>", decoder)
}

fn read_payload<R: Read + ?Sized>(
    src: &mut R,
    stream_len: Option<u64>,
    header: &ContainerHeader,
    path: &str,
) -> Result<Vec<u8>, ContainerError> {
    let declared = header.compressed_size;
    let mut payload = Vec::new();

    match stream_len {
        Some(total) => {
            let actual = total.saturating_sub(HEADER_SIZE as u64);
            if actual != u64::from(declared) {
                return Err(ContainerError::SizeMismatch { declared, actual });
            }
            reserve(&mut payload, u64::from(declared))?;
            src.take(u64::from(declared))
                .read_to_end(&mut payload)
                .map_err(|e| ContainerError::io(path, e))?;
            // The file may have shrunk between stat and read.
            if payload.len() as u64 != u64::from(declared) {
                return Err(ContainerError::SizeMismatch {
                    declared,
                    actual: payload.len() as u64,
                });
            }
        }
        None => {
            src.read_to_end(&mut payload)
                .map_err(|e| ContainerError::io(path, e))?;
        }
    }

    Ok(payload)
}

fn decode_payload<D: BlockDecoder + ?Sized>(
    payload: &[u8],
    header: &ContainerHeader,
    decoder: &D,
) -> Result<Vec<u8>, ContainerError> {
    let expected = header.original_size;
    let mut dst = Vec::new();
    if expected == 0 {
        return Ok(dst);
    }
    if u64::from(expected) > payload.len() as u64 * MAX_EXPANSION {
        return Err(ContainerError::ImplausibleSize {
            original: expected,
            payload: payload.len(),
        });
    }

    let len = reserve(&mut dst, u64::from(expected))?;
    dst.resize(len, 0);

    let written = decoder
        .decompress(payload, &mut dst)
        .map_err(|e| ContainerError::Decode { reason: e.0 })?;
    if written != len {
        return Err(ContainerError::ShortOutput {
            expected,
            got: written,
        });
    }
    Ok(dst)
}

/// Reserves exactly `size` bytes, returning the size as `usize`.
fn reserve(buf: &mut Vec<u8>, size: u64) -> Result<usize, ContainerError> {
    let len = usize::try_from(size).map_err(|_| ContainerError::Allocation { size })?;
    buf.try_reserve_exact(len)
        .map_err(|_| ContainerError::Allocation { size })?;
    Ok(len)
}
