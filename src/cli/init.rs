//! CLI initialization and binary-alias detection.
//!
//! When the tool is installed under several names (`lz4cat`, `unlz4`) via
//! hard or symbolic links, the starting mode is chosen from `argv[0]` before
//! any flag parsing takes place.
//!
//! [`detect_alias`] reads the environment defaults and returns a [`CliInit`];
//! the option resolver in [`crate::cli::args`] layers explicit flags on top.

use crate::cli::arg_utils::{exe_name_match, last_name_from_path};
use crate::cli::constants::{DISPLAY_ERRORS, LZ4CAT, UNLZ4};
use crate::cli::op_mode::{init_c_level, init_legacy_extension, ExtensionPolicy, OpMode};
use crate::config::DISPLAY_LEVEL_DEFAULT;

/// Initial CLI state derived from the binary name and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliInit {
    /// Basename of `argv[0]`, used in usage text.
    pub exe_name: String,
    /// Starting operation mode.
    pub op_mode: OpMode,
    /// Initial compression level (from `LZ4_CLEVEL` or the default).
    pub c_level: u32,
    /// Starting verbosity.
    pub display_level: u32,
    /// Whether all positionals are inputs from the start (`lz4cat`).
    pub multiple_inputs: bool,
    /// Whether output goes to stdout from the start (`lz4cat`).
    pub force_stdout: bool,
    /// Whether existing outputs may be replaced from the start (`lz4cat`).
    pub force_overwrite: bool,
    /// Legacy suffix rules (from `LZ4_LEGACY_EXTENSION`).
    pub extensions: ExtensionPolicy,
}

impl CliInit {
    /// Plain `lz4` defaults with explicit environment-derived values.
    ///
    /// Used directly by tests so they never depend on the process environment.
    pub fn with_defaults(exe_name: &str, c_level: u32, extensions: ExtensionPolicy) -> Self {
        CliInit {
            exe_name: exe_name.to_owned(),
            op_mode: OpMode::Auto,
            c_level,
            display_level: DISPLAY_LEVEL_DEFAULT,
            multiple_inputs: false,
            force_stdout: false,
            force_overwrite: false,
            extensions,
        }
    }
}

/// Detect the operation mode and initial settings from `argv[0]`.
///
/// | Binary name | Effect                                                        |
/// |-------------|---------------------------------------------------------------|
/// | `lz4cat`    | Decompress + force stdout + multiple inputs + overwrite, quiet |
/// | `unlz4`     | Decompress only                                               |
///
/// `argv0` may be a full path; the basename is extracted internally.
pub fn detect_alias(argv0: &str) -> CliInit {
    detect_alias_with(argv0, init_c_level(), init_legacy_extension())
}

/// Testable core of [`detect_alias`] taking the environment-derived values.
pub fn detect_alias_with(argv0: &str, c_level: u32, extensions: ExtensionPolicy) -> CliInit {
    let exe_name = last_name_from_path(argv0);
    let mut init = CliInit::with_defaults(exe_name, c_level, extensions);

    if exe_name_match(exe_name, LZ4CAT) {
        init.op_mode = OpMode::Decompress;
        init.force_stdout = true;
        init.force_overwrite = true;
        init.multiple_inputs = true;
        init.display_level = DISPLAY_ERRORS;
    }

    if exe_name_match(exe_name, UNLZ4) {
        init.op_mode = OpMode::Decompress;
    }

    init
}
