//! Recursive expansion of directory arguments (`-r`).
//!
//! Directories are walked with [`walkdir`] without following symlinks, so
//! symlink entries found inside a tree are neither listed nor descended into.
//! Non-directory arguments, including the stdin sentinel, pass through
//! unchanged and in order.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::util::file_status::is_directory;

/// Expands every directory in `inputs` into the regular files below it.
///
/// Entries of one directory are visited in file-name order so the batch
/// order is stable across runs. Any unreadable directory entry aborts the
/// expansion with its `io::Error`.
pub fn create_file_list(inputs: &[String]) -> io::Result<Vec<String>> {
    let mut result = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if !is_directory(path) {
            result.push(input.clone());
            continue;
        }
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let msg = e.to_string();
                e.into_io_error()
                    .unwrap_or_else(|| io::Error::other(msg))
            })?;
            if entry.file_type().is_file() {
                result.push(entry.path().to_string_lossy().into_owned());
            }
        }
    }
    Ok(result)
}
