//! Operation mode selection and startup defaults for the CLI.
//!
//! This module provides:
//! - [`OpMode`]: what the CLI should do (compress, decompress, test, bench, auto).
//! - [`ExtensionPolicy`]: which filename suffixes mark a container file, and
//!   whether the legacy-format flag selects a different suffix.
//! - [`determine_op_mode`]: infers the mode of an `Auto` run from a filename.
//! - [`init_c_level_from`] / [`init_legacy_extension_from`]: environment-based
//!   defaults, read once before argument parsing.

use crate::cli::arg_utils::read_u32_from_str;
use crate::cli::constants::{DISPLAY_NORMAL, LZ4_EXTENSION};
use crate::config::CLEVEL_DEFAULT;
use crate::displaylevel;

/// Environment variable seeding the default compression level.
pub const ENV_CLEVEL: &str = "LZ4_CLEVEL";

/// Environment variable naming the suffix used together with `-l`.
pub const ENV_LEGACY_EXTENSION: &str = "LZ4_LEGACY_EXTENSION";

/// What the CLI should do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Mode inferred per input from its extension: decompress if it carries a
    /// container suffix, compress otherwise.
    Auto,
    /// Wrap input into the container format.
    Compress,
    /// Decode a container back to its original bytes.
    Decompress,
    /// Decode and verify without writing output.
    Test,
    /// Benchmark request (recognised but not executed by this build).
    Bench,
}

/// Suffix rules for container filenames.
///
/// The standard suffix is always [`LZ4_EXTENSION`]. When `legacy` is set,
/// runs with the legacy-format flag append that suffix on compression and
/// additionally recognise and strip it on decompression. When `legacy` is
/// `None` the legacy flag has no effect on naming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionPolicy {
    pub legacy: Option<String>,
}

impl ExtensionPolicy {
    /// Suffix appended to compressed outputs.
    pub fn compress_suffix(&self, legacy_format: bool) -> &str {
        match (&self.legacy, legacy_format) {
            (Some(ext), true) => ext.as_str(),
            _ => LZ4_EXTENSION,
        }
    }

    /// Strips a recognised container suffix from `name`.
    ///
    /// The legacy suffix is tried first so that a longer suffix wins over a
    /// shorter one it ends with.
    pub fn strip_suffix<'a>(&self, name: &'a str, legacy_format: bool) -> Option<&'a str> {
        if legacy_format {
            if let Some(ext) = &self.legacy {
                if let Some(base) = name.strip_suffix(ext.as_str()) {
                    return Some(base);
                }
            }
        }
        name.strip_suffix(LZ4_EXTENSION)
    }

    /// Returns `true` if `name` carries a recognised container suffix.
    pub fn is_container_name(&self, name: &str, legacy_format: bool) -> bool {
        self.strip_suffix(name, legacy_format).is_some()
    }
}

/// Infer the operation mode from `filename`'s extension.
///
/// Returns [`OpMode::Decompress`] if `filename` carries a container suffix
/// under `policy`, [`OpMode::Compress`] otherwise.
pub fn determine_op_mode(filename: &str, policy: &ExtensionPolicy, legacy_format: bool) -> OpMode {
    if policy.is_container_name(filename, legacy_format) {
        OpMode::Decompress
    } else {
        OpMode::Compress
    }
}

/// Read the default compression level from the `LZ4_CLEVEL` environment variable.
pub fn init_c_level() -> u32 {
    init_c_level_from(std::env::var(ENV_CLEVEL).ok().as_deref(), DISPLAY_NORMAL)
}

/// Testable core of [`init_c_level`]: parse an optional `LZ4_CLEVEL` value.
///
/// A value starting with a decimal digit is parsed like a numeric flag
/// argument. Anything else is ignored with a warning at `display_level` ≥ 2
/// and [`CLEVEL_DEFAULT`] is returned.
pub fn init_c_level_from(env_val: Option<&str>, display_level: u32) -> u32 {
    if let Some(env) = env_val {
        if let Some((val, _rest)) = read_u32_from_str(env) {
            return val;
        }
        displaylevel!(
            display_level,
            2,
            "Ignore environment variable setting {}={}: not a valid unsigned value \n",
            ENV_CLEVEL,
            env
        );
    }
    CLEVEL_DEFAULT
}

/// Read the legacy suffix from the `LZ4_LEGACY_EXTENSION` environment variable.
pub fn init_legacy_extension() -> ExtensionPolicy {
    init_legacy_extension_from(std::env::var(ENV_LEGACY_EXTENSION).ok().as_deref())
}

/// Testable core of [`init_legacy_extension`].
///
/// Empty values are treated as unset. A missing leading dot is added, so
/// `lz4l` and `.lz4l` are equivalent.
pub fn init_legacy_extension_from(env_val: Option<&str>) -> ExtensionPolicy {
    let legacy = env_val
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.starts_with('.') {
                s.to_owned()
            } else {
                format!(".{s}")
            }
        });
    ExtensionPolicy { legacy }
}
