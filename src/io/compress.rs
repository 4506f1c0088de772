//! Compression drivers: produce single-block containers.
//!
//! The whole input is read into memory, encoded as one raw LZ4 block and
//! written behind the 8-byte header. Inputs that do not fit the header's
//! 32-bit size fields are refused; for regular files the check happens before
//! anything is read.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::container::{encode_container, BlockEncoder, ContainerError, Lz4Block};
use crate::displaylevel;
use crate::io::batch::{final_time_display, report_failure, BatchSummary};
use crate::io::file_io::{open_dst_file, open_src_file, STDIN_MARK, STDOUT_MARK};
use crate::io::prefs::Prefs;
use crate::util::copy_file_stat;

/// Largest input the container header can describe.
const MAX_INPUT: u64 = u32::MAX as u64;

/// Compresses `src` into `dst` with the LZ4 block codec.
///
/// Returns the size of the written container.
pub fn compress_filename(src: &str, dst: &str, prefs: &Prefs) -> Result<u64, ContainerError> {
    compress_filename_with(src, dst, prefs, &Lz4Block)
}

/// Same as [`compress_filename`] with an explicit block encoder.
pub fn compress_filename_with<E>(
    src: &str,
    dst: &str,
    prefs: &Prefs,
    encoder: &E,
) -> Result<u64, ContainerError>
where
    E: BlockEncoder + ?Sized,
{
    let input = open_src_file(src, prefs.display_level).map_err(|e| ContainerError::io(src, e))?;
    if let Some(len) = input.len.filter(|&len| len > MAX_INPUT) {
        return Err(ContainerError::InputTooLarge { size: len });
    }
    let from_stdin = input.is_stdin;

    let mut output = open_dst_file(dst, prefs).map_err(|e| ContainerError::io(dst, e))?;
    // Compressed data has no long zero runs worth punching holes for.
    output.sparse_mode = false;

    // One byte past the limit is enough to detect an oversized stream.
    let mut data = Vec::new();
    input
        .take(MAX_INPUT + 1)
        .read_to_end(&mut data)
        .map_err(|e| ContainerError::io(src, e))?;
    let original = data.len() as u64;

    let container = encode_container(&data, encoder)?;
    drop(data);
    let written = container.len() as u64;

    output
        .write_data(&container)
        .map_err(|e| ContainerError::io(dst, e))?;
    let regular = output.is_regular_file();
    output.commit().map_err(|e| ContainerError::io(dst, e))?;

    if regular && !from_stdin {
        if let Err(e) = copy_file_stat(Path::new(src), Path::new(dst)) {
            displaylevel!(
                prefs.display_level,
                3,
                "Warning : {}: cannot copy file attributes ({})\n",
                dst,
                e
            );
        }
    }

    if prefs.remove_src_file && !from_stdin {
        fs::remove_file(src).map_err(|e| ContainerError::io(src, e))?;
    }

    displaylevel!(prefs.display_level, 2, "\r{:79}\r", "");
    displaylevel!(
        prefs.display_level,
        2,
        "Compressed {} bytes into {} bytes ==> {:.2}%\n",
        original,
        written,
        written as f64 / original.max(1) as f64 * 100.0
    );
    Ok(written)
}

/// Compresses every file in `srcs`.
///
/// `dst_mark` routes all outputs to stdout (or discards them); with `None`
/// each output name is the input name plus the compression suffix.
pub fn compress_multiple_filenames(
    srcs: &[String],
    dst_mark: Option<&str>,
    prefs: &Prefs,
) -> BatchSummary {
    compress_multiple_filenames_with(srcs, dst_mark, prefs, &Lz4Block)
}

/// Same as [`compress_multiple_filenames`] with an explicit block encoder.
pub fn compress_multiple_filenames_with<E>(
    srcs: &[String],
    dst_mark: Option<&str>,
    prefs: &Prefs,
    encoder: &E,
) -> BatchSummary
where
    E: BlockEncoder + ?Sized,
{
    let start = Instant::now();
    let mut summary = BatchSummary::default();
    let suffix = prefs.compress_suffix();

    for src in srcs {
        let dst = match dst_mark {
            Some(mark) => mark.to_owned(),
            None if src == STDIN_MARK => STDOUT_MARK.to_owned(),
            None => format!("{src}{suffix}"),
        };
        match compress_filename_with(src, &dst, prefs, encoder) {
            Ok(n) => summary.record_success(n),
            Err(e) => {
                report_failure(prefs.display_level, src, &e);
                summary.record_failure(&e);
            }
        }
    }

    final_time_display(prefs.display_level, start, summary.total_bytes);
    summary
}
