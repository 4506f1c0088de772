// lz4cli: single-block LZ4 container tool

pub mod cli;
pub mod config;
pub mod container;
pub mod io;
pub mod util;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use container::{
    decode_container, decode_container_bytes, encode_container, BlockDecoder, BlockEncoder,
    ContainerError, ContainerHeader, Lz4Block,
};
