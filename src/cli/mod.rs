//! Command-line interface for the `lz4` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, display levels and the `display*!` macros. |
//! | [`help`]      | Usage/help text printers. |
//! | [`arg_utils`] | Path basename, executable-name matching, wrapping integer parsing. |
//! | [`op_mode`]   | `OpMode`, extension policy and environment-based defaults. |
//! | [`init`]      | `CliInit`: starting state built from the binary name (`lz4cat`, `unlz4`). |
//! | [`args`]      | The option resolver producing `ResolvedConfig`. |
//!
//! Typical call sequence: `detect_alias` → `parse_args` → dispatch to the I/O layer.

pub mod constants;
pub mod help;
pub mod arg_utils;
pub mod op_mode;
pub mod init;
pub mod args;
