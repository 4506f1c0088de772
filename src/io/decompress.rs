//! Decompression drivers.
//!
//! [`decompress_filename`] runs the container pipeline for one source and
//! one destination:
//!
//! 1. open the source (regular files report their length, which makes the
//!    payload size check strict);
//! 2. unless in test mode, open the destination; an existing file is refused
//!    here, before any input is read;
//! 3. decode the container into a buffer of exactly `original_size` bytes;
//! 4. write the buffer and commit the destination, then copy mtime and
//!    permissions from the source;
//! 5. with `--rm`, delete the source, but only after the commit succeeded,
//!    never for stdin and never in test mode.
//!
//! Any failure before the commit leaves no file at the destination.
//!
//! [`decompress_multiple_filenames`] repeats this per input, deriving output
//! names by stripping the container suffix. Failures are reported and counted;
//! the batch always runs to the end.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::container::{decode_container, BlockDecoder, ContainerError, Lz4Block};
use crate::displaylevel;
use crate::io::batch::{final_time_display, report_failure, BatchSummary};
use crate::io::file_io::{open_dst_file, open_src_file, NUL_MARK, STDIN_MARK, STDOUT_MARK};
use crate::io::prefs::Prefs;
use crate::util::copy_file_stat;

/// Decompresses `src` into `dst` with the LZ4 block codec.
///
/// Returns the number of decoded bytes.
pub fn decompress_filename(src: &str, dst: &str, prefs: &Prefs) -> Result<u64, ContainerError> {
    decompress_filename_with(src, dst, prefs, &Lz4Block)
}

/// Same as [`decompress_filename`] with an explicit block decoder.
pub fn decompress_filename_with<D>(
    src: &str,
    dst: &str,
    prefs: &Prefs,
    decoder: &D,
) -> Result<u64, ContainerError>
where
    D: BlockDecoder + ?Sized,
{
    let mut input =
        open_src_file(src, prefs.display_level).map_err(|e| ContainerError::io(src, e))?;
    let from_stdin = input.is_stdin;

    let mut output = if prefs.test_mode {
        None
    } else {
        Some(open_dst_file(dst, prefs).map_err(|e| ContainerError::io(dst, e))?)
    };

    let stream_len = input.len;
    let decoded = decode_container(&mut input, stream_len, src, decoder)?;
    drop(input);
    let size = decoded.data.len() as u64;

    if let Some(mut out) = output.take() {
        out.write_data(&decoded.data)
            .map_err(|e| ContainerError::io(dst, e))?;
        let regular = out.is_regular_file();
        out.commit().map_err(|e| ContainerError::io(dst, e))?;

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
    }

    if prefs.remove_src_file && !prefs.test_mode && !from_stdin {
        fs::remove_file(src).map_err(|e| ContainerError::io(src, e))?;
    }

    displaylevel!(prefs.display_level, 2, "\r{:79}\r", "");
    displaylevel!(
        prefs.display_level,
        2,
        "{:<30.30} : decoded {} bytes \n",
        src,
        size
    );
    Ok(size)
}

/// Decompresses every file in `srcs`.
///
/// `dst_mark` routes all outputs to [`STDOUT_MARK`] or [`NUL_MARK`]; with
/// `None` each output name is the input name minus its container suffix, and
/// inputs without one are skipped. In test mode no output is opened at all.
pub fn decompress_multiple_filenames(
    srcs: &[String],
    dst_mark: Option<&str>,
    prefs: &Prefs,
) -> BatchSummary {
    decompress_multiple_filenames_with(srcs, dst_mark, prefs, &Lz4Block)
}

/// Same as [`decompress_multiple_filenames`] with an explicit block decoder.
pub fn decompress_multiple_filenames_with<D>(
    srcs: &[String],
    dst_mark: Option<&str>,
    prefs: &Prefs,
    decoder: &D,
) -> BatchSummary
where
    D: BlockDecoder + ?Sized,
{
    let start = Instant::now();
    let mut summary = BatchSummary::default();

    for src in srcs {
        let dst = if prefs.test_mode {
            NUL_MARK
        } else if let Some(mark) = dst_mark {
            mark
        } else if src == STDIN_MARK {
            STDOUT_MARK
        } else {
            match prefs
                .extensions
                .strip_suffix(src, prefs.legacy_format)
                .filter(|base| !base.is_empty())
            {
                Some(base) => base,
                None => {
                    displaylevel!(
                        prefs.display_level,
                        1,
                        "File extension doesn't match expected LZ4_EXTENSION ({:4}); will not process file: {}\n",
                        prefs.compress_suffix(),
                        src
                    );
                    summary.record_skip();
                    continue;
                }
            }
        };

        match decompress_filename_with(src, dst, prefs, decoder) {
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
