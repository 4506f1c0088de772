//! Sparse output for regular files.
//!
//! Decoded data is written in segments of [`SPARSE_SEGMENT_SIZE`] bytes. The
//! leading run of zero bytes in each segment is not written: it accumulates as
//! a pending skip and is turned into a forward `seek` when the next non-zero
//! byte arrives, leaving a hole on filesystems that support them. When the
//! output ends on zeros, [`SparseWriter::finish`] writes a single final byte
//! so the file still has its full logical length.
//!
//! Seeking past the end of a file reads back as zeros on every platform, so
//! the output is byte-identical whether or not holes are actually created.

use std::io::{self, Seek, SeekFrom, Write};

/// Segment granularity for zero detection.
pub const SPARSE_SEGMENT_SIZE: usize = 32 * 1024;

/// Largest single forward seek issued while flushing pending zeros.
const MAX_SEEK: u64 = 1 << 30;

/// Writer that skips zero runs with `seek`.
pub struct SparseWriter<'a, F: Write + Seek> {
    file: &'a mut F,
    pending: u64,
}

impl<'a, F: Write + Seek> SparseWriter<'a, F> {
    pub fn new(file: &'a mut F) -> Self {
        SparseWriter { file, pending: 0 }
    }

    /// Writes `buf`, deferring leading zeros of each segment.
    pub fn write_sparse(&mut self, buf: &[u8]) -> io::Result<()> {
        for segment in buf.chunks(SPARSE_SEGMENT_SIZE) {
            let zeros = segment.iter().take_while(|&&b| b == 0).count();
            self.pending += zeros as u64;
            if zeros == segment.len() {
                continue;
            }
            self.skip_pending()?;
            self.file.write_all(&segment[zeros..])?;
        }
        Ok(())
    }

    /// Materialises trailing zeros. Must be called once after the last write.
    pub fn finish(mut self) -> io::Result<()> {
        if self.pending == 0 {
            return Ok(());
        }
        self.pending -= 1;
        self.skip_pending()?;
        self.file.write_all(&[0u8])
    }

    fn skip_pending(&mut self) -> io::Result<()> {
        while self.pending > 0 {
            let step = self.pending.min(MAX_SEEK);
            // step <= 1 GiB, always representable as i64
            self.file.seek(SeekFrom::Current(step as i64))?;
            self.pending -= step;
        }
        Ok(())
    }
}
