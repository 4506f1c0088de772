//! File-level drivers around the container pipeline.
//!
//! This module assembles the I/O sub-modules and re-exports the symbols
//! consumed by the dispatcher in `main.rs`.

pub mod batch;
pub mod compress;
pub mod decompress;
pub mod file_io;
pub mod prefs;
pub mod sparse;

// ── Core types ────────────────────────────────────────────────────────────────
pub use batch::BatchSummary;
pub use prefs::Prefs;

// ── Special I/O sentinels ─────────────────────────────────────────────────────
pub use file_io::{NULL_OUTPUT, NUL_MARK, STDIN_MARK, STDOUT_MARK};

// ── Compression ───────────────────────────────────────────────────────────────
pub use compress::{compress_filename, compress_multiple_filenames};

// ── Decompression ─────────────────────────────────────────────────────────────
pub use decompress::{decompress_filename, decompress_multiple_filenames};

/// Reports a single-file failure the same way the batch drivers do.
pub use batch::report_failure;
