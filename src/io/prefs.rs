// prefs.rs: preferences shared by the compress and decompress drivers.
//
// The display level is carried here as a plain field. Every diagnostic in the
// I/O layer reads it from the `Prefs` it was handed; nothing is global.

use crate::cli::args::{ResolvedConfig, SparseMode};
use crate::cli::constants::DISPLAY_NORMAL;
use crate::cli::op_mode::{ExtensionPolicy, OpMode};

/// All tunable behaviour of the file drivers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefs {
    /// 0 silent, 1 errors, 2 results, 3 notices, 4 verbose. Default: 2.
    pub display_level: u32,
    /// Replace existing destination files. Default: false.
    pub overwrite: bool,
    /// Delete the source after a successful run (`--rm`). Default: false.
    pub remove_src_file: bool,
    /// Decode and discard (`-t`). No destination is opened. Default: false.
    pub test_mode: bool,
    /// Sparse policy for regular-file destinations. Default: Auto.
    pub sparse: SparseMode,
    /// `-l` was given; selects the legacy suffix when one is configured.
    pub legacy_format: bool,
    pub extensions: ExtensionPolicy,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            display_level: DISPLAY_NORMAL,
            overwrite: false,
            remove_src_file: false,
            test_mode: false,
            sparse: SparseMode::Auto,
            legacy_format: false,
            extensions: ExtensionPolicy::default(),
        }
    }
}

impl Prefs {
    /// Builds driver preferences from a resolved command line.
    ///
    /// `display_level` is taken as given; the caller applies any downgrade
    /// (stdout output, multiple inputs) beforehand.
    pub fn from_config(config: &ResolvedConfig, display_level: u32) -> Self {
        Prefs {
            display_level,
            overwrite: config.flags.force_overwrite,
            remove_src_file: config.flags.remove_src_file,
            test_mode: config.mode == OpMode::Test,
            sparse: config.flags.sparse,
            legacy_format: config.flags.legacy_format,
            extensions: config.extensions.clone(),
        }
    }

    /// Whether holes may be punched in a regular-file destination.
    pub fn sparse_for_files(&self) -> bool {
        self.sparse != SparseMode::Disabled
    }

    /// Suffix appended by compression.
    pub fn compress_suffix(&self) -> &str {
        self.extensions.compress_suffix(self.legacy_format)
    }
}
