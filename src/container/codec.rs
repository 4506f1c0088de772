//! Binding to the raw LZ4 block primitive.
//!
//! The pipeline only relies on the contract below; the block format itself
//! is provided by `lz4_flex`.
//!
//! - [`BlockDecoder::decompress`] fills `dst` from `src` and returns the number
//!   of bytes written. It never writes past `dst.len()` and reports malformed
//!   input as an error. Whether the whole of `dst` was filled is checked by
//!   the caller.
//! - [`BlockEncoder::compress`] produces a raw block that the decoder turns
//!   back into the original bytes.

use thiserror::Error;

/// Failure reported by the block primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct BlockError(pub String);

pub trait BlockDecoder {
    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, BlockError>;
}

pub trait BlockEncoder {
    fn compress(&self, src: &[u8]) -> Vec<u8>;
}

/// The LZ4 raw block codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4Block;

impl BlockDecoder for Lz4Block {
    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, BlockError> {
        lz4_flex::block::decompress_into(src, dst).map_err(|e| BlockError(e.to_string()))
    }
}

impl BlockEncoder for Lz4Block {
    fn compress(&self, src: &[u8]) -> Vec<u8> {
        lz4_flex::block::compress(src)
    }
}
