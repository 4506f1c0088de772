//! Error type for the container pipeline.
//!
//! Every variant is fatal to the file being processed and never to the whole
//! batch. [`ContainerError::kind`] groups variants into the failure classes
//! the dispatcher reports, and [`ContainerError::exit_code`] gives the process
//! status used when a file fails.

use std::io;

use thiserror::Error;

use crate::container::header::HEADER_SIZE;

/// Failure classes of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Open, read, write, rename or delete failed.
    Io,
    /// Header missing or inconsistent with the stream.
    Format,
    /// The block primitive rejected the payload.
    Decode,
    /// The destination buffer could not be obtained.
    Allocation,
}

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("truncated header: expected {HEADER_SIZE} bytes, got {got}")]
    TruncatedHeader { got: usize },

    #[error("header declares {declared} compressed bytes but {actual} follow the header")]
    SizeMismatch { declared: u32, actual: u64 },

    #[error("input of {size} bytes is too large for the container (max {max})", max = u32::MAX)]
    InputTooLarge { size: u64 },

    #[error("Decoding Failed! Corrupted input detected! ({reason})")]
    Decode { reason: String },

    #[error("header declares {original} decoded bytes, more than a {payload}-byte block can produce")]
    ImplausibleSize { original: u32, payload: usize },

    #[error("decoded {got} bytes but header declares {expected}")]
    ShortOutput { expected: u32, got: usize },

    #[error("cannot allocate {size} bytes for the decoded output")]
    Allocation { size: u64 },
}

impl ContainerError {
    /// Wraps an `io::Error` with the path it concerns.
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        ContainerError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ContainerError::Io { .. } => ErrorKind::Io,
            ContainerError::TruncatedHeader { .. }
            | ContainerError::SizeMismatch { .. }
            | ContainerError::ImplausibleSize { .. }
            | ContainerError::InputTooLarge { .. } => ErrorKind::Format,
            ContainerError::Decode { .. } | ContainerError::ShortOutput { .. } => {
                ErrorKind::Decode
            }
            ContainerError::Allocation { .. } => ErrorKind::Allocation,
        }
    }

    /// Process exit status for this failure. Usage errors use 1.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Io => 2,
            ErrorKind::Format => 3,
            ErrorKind::Decode => 4,
            ErrorKind::Allocation => 5,
        }
    }
}
