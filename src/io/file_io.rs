//! Source and destination handles for the file drivers.
//!
//! - [`open_src_file`] resolves a path string to a [`SrcFile`], handling the
//!   `"stdin"` sentinel, rejecting directories and recording the stream length
//!   when the source is a regular file.
//! - [`open_dst_file`] resolves a path string to a [`DstFile`], handling the
//!   `"stdout"` and discard sentinels and enforcing the overwrite policy.
//!
//! Regular-file destinations are staged in a temporary file created next to
//! the final path. Nothing appears under the destination name until
//! [`DstFile::commit`] renames the fully written temporary into place; a
//! `DstFile` dropped without a commit removes its temporary.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::cli::args::SparseMode;
use crate::displaylevel;
use crate::io::prefs::Prefs;
use crate::io::sparse::SparseWriter;

// ── Sentinel strings ──────────────────────────────────────────────────────────

/// Sentinel: read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Sentinel: write to standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Sentinel: discard output.
#[cfg(windows)]
pub const NUL_MARK: &str = "nul";
#[cfg(not(windows))]
pub const NUL_MARK: &str = "/dev/null";

/// User-facing spelling of the discard output, translated to [`NUL_MARK`] by
/// the option resolver.
pub const NULL_OUTPUT: &str = "null";

/// Prefix of staged temporaries in the destination directory.
const TMP_PREFIX: &str = ".lz4tmp";

// ── Source ────────────────────────────────────────────────────────────────────

/// An opened input stream.
pub struct SrcFile {
    reader: Box<dyn Read>,
    /// Total stream length when the source is a regular file; `None` for
    /// stdin, pipes and other special files.
    pub len: Option<u64>,
    pub is_stdin: bool,
}

impl Read for SrcFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

/// Opens `path` for reading.
pub fn open_src_file(path: &str, display_level: u32) -> io::Result<SrcFile> {
    if path == STDIN_MARK {
        displaylevel!(display_level, 4, "Using stdin for input\n");
        return Ok(SrcFile {
            reader: Box::new(io::stdin()),
            len: None,
            is_stdin: true,
        });
    }

    let file = File::open(path)?;
    let meta = file.metadata()?;
    if meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory -- ignored",
        ));
    }
    Ok(SrcFile {
        reader: Box::new(BufReader::new(file)),
        len: meta.is_file().then(|| meta.len()),
        is_stdin: false,
    })
}

// ── Destination ───────────────────────────────────────────────────────────────

enum Target {
    Stdout,
    Discard,
    Staged {
        tmp: NamedTempFile,
        path: PathBuf,
        overwrite: bool,
    },
}

/// A write destination produced by [`open_dst_file`].
pub struct DstFile {
    target: Target,
    /// Zero runs are skipped with `seek` instead of written.
    pub sparse_mode: bool,
}

impl DstFile {
    pub fn is_stdout(&self) -> bool {
        matches!(self.target, Target::Stdout)
    }

    pub fn is_regular_file(&self) -> bool {
        matches!(self.target, Target::Staged { .. })
    }

    /// Writes the complete output.
    pub fn write_data(&mut self, data: &[u8]) -> io::Result<()> {
        match &mut self.target {
            Target::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(data)?;
                out.flush()
            }
            Target::Discard => Ok(()),
            Target::Staged { tmp, .. } => {
                let file = tmp.as_file_mut();
                if self.sparse_mode {
                    let mut w = SparseWriter::new(file);
                    w.write_sparse(data)?;
                    w.finish()
                } else {
                    file.write_all(data)
                }
            }
        }
    }

    /// Makes the output visible under its final name.
    ///
    /// Without overwrite permission the rename refuses to replace a file that
    /// appeared after [`open_dst_file`] checked for it.
    pub fn commit(self) -> io::Result<()> {
        let Target::Staged {
            tmp,
            path,
            overwrite,
        } = self.target
        else {
            return Ok(());
        };

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))?;
        }
        let persisted = if overwrite {
            tmp.persist(&path)
        } else {
            tmp.persist_noclobber(&path)
        };
        persisted.map(|_| ()).map_err(|e| e.error)
    }
}

/// Opens a destination for writing.
///
/// - `"stdout"` → standard output, never sparse.
/// - [`NUL_MARK`] → discard; no file is touched.
/// - anything else → a temporary staged in the destination's directory.
///
/// An existing destination is refused unless `prefs.overwrite` is set.
pub fn open_dst_file(path: &str, prefs: &Prefs) -> io::Result<DstFile> {
    if path == STDOUT_MARK {
        displaylevel!(prefs.display_level, 4, "Using stdout for output\n");
        if prefs.sparse == SparseMode::Enabled {
            displaylevel!(
                prefs.display_level,
                3,
                "Sparse File Support has no effect on stdout \n"
            );
        }
        return Ok(DstFile {
            target: Target::Stdout,
            sparse_mode: false,
        });
    }

    if path == NUL_MARK {
        return Ok(DstFile {
            target: Target::Discard,
            sparse_mode: false,
        });
    }

    let dst = Path::new(path);
    if !prefs.overwrite && dst.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "already exists; not overwritten",
        ));
    }
    if dst.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory",
        ));
    }

    let dir = match dst.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = tempfile::Builder::new()
        .prefix(TMP_PREFIX)
        .tempfile_in(dir)?;

    Ok(DstFile {
        target: Target::Staged {
            tmp,
            path: dst.to_path_buf(),
            overwrite: prefs.overwrite,
        },
        sparse_mode: prefs.sparse_for_files(),
    })
}
