//! File status helpers: type checks and metadata propagation.
//!
//! Timestamps go through the `filetime` crate; permission bits through
//! `std::fs::set_permissions`, which maps to `chmod` on Unix and to the
//! read-only attribute on Windows.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use filetime::FileTime;

/// Copies the modification time and permission bits of `src` onto `dst`.
///
/// Both paths must be regular files. The access time of `dst` is set to now.
pub fn copy_file_stat(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    if !meta.is_file() || !is_reg_file(dst) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "metadata can only be copied between regular files",
        ));
    }

    let atime = FileTime::from_system_time(SystemTime::now());
    let mtime = FileTime::from_last_modification_time(&meta);
    filetime::set_file_times(dst, atime, mtime)?;
    fs::set_permissions(dst, meta.permissions())
}

/// Returns `true` if `path` refers to a regular file (symlinks followed).
pub fn is_reg_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_file())
        .unwrap_or(false)
}

/// Returns `true` if `path` refers to a directory (symlinks followed).
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}
