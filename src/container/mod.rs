//! The single-block container format.
//!
//! A container is an 8-byte little-endian header (`compressed_size`,
//! `original_size`) followed by exactly `compressed_size` bytes holding one
//! raw LZ4 block that expands to `original_size` bytes.
//!
//! | Submodule  | Responsibility |
//! |------------|---------------|
//! | [`header`] | Header layout and reading/writing. |
//! | [`codec`]  | `BlockDecoder` / `BlockEncoder` traits and the LZ4 binding. |
//! | [`decode`] | Header → length check → exact-size decode. |
//! | [`encode`] | Producing containers for compress mode. |
//! | [`error`]  | `ContainerError` and its exit codes. |

pub mod codec;
pub mod decode;
pub mod encode;
pub mod error;
pub mod header;

pub use codec::{BlockDecoder, BlockEncoder, BlockError, Lz4Block};
pub use decode::{decode_container, decode_container_bytes, Decoded, MAX_EXPANSION};
pub use encode::encode_container;
pub use error::{ContainerError, ErrorKind};
pub use header::{ContainerHeader, HEADER_SIZE};
