//! Writing a container: header followed by one raw block.

use crate::container::codec::BlockEncoder;
use crate::container::error::ContainerError;
use crate::container::header::{ContainerHeader, HEADER_SIZE};

/// Builds a complete container for `src` in memory.
///
/// Inputs longer than `u32::MAX` bytes cannot be described by the header and
/// are refused. An empty input produces a bare `(0, 0)` header without
/// invoking the encoder.
pub fn encode_container<E>(src: &[u8], encoder: &E) -> Result<Vec<u8>, ContainerError>
where
    E: BlockEncoder + ?Sized,
{
    let original_size = u32::try_from(src.len()).map_err(|_| ContainerError::InputTooLarge {
        size: src.len() as u64,
    })?;

    let payload = if src.is_empty() {
        Vec::new()
    } else {
        encoder.compress(src)
    };
    let compressed_size =
        u32::try_from(payload.len()).map_err(|_| ContainerError::InputTooLarge {
            size: payload.len() as u64,
        })?;

    let header = ContainerHeader {
        compressed_size,
        original_size,
    };
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}
