//! Option resolution for the `lz4` / `unlz4` / `lz4cat` family.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParseOutcome`]: either a [`ResolvedConfig`] to execute, or
//! a terminal request for help / version text.
//!
//! Short options may be aggregated (e.g. `-9fv`). Each character is handled
//! independently, left to right; a digit starts a numeric argument that
//! greedily consumes every following digit of the same token. Long options
//! are matched by exact string. A bare `--` marks the end of options.
//!
//! The resolver never touches the filesystem and never prints: it only
//! inspects token text. Bad or unrecognised options return a [`UsageError`]
//! whose message begins with `"bad usage: "`.

use thiserror::Error;

use crate::cli::arg_utils::read_u32_from_str;
use crate::cli::init::CliInit;
use crate::cli::op_mode::{ExtensionPolicy, OpMode};
use crate::config::{
    block_size_from_id, BENCH_SECONDS_DEFAULT, BLOCKSIZEID_DEFAULT, BLOCKSIZEID_MAX,
    BLOCKSIZEID_MIN, BLOCKSIZE_EXPLICIT_MIN, CLEVEL_HC_MIN, CLEVEL_MAX,
};
use crate::io::file_io::{NULL_OUTPUT, NUL_MARK, STDIN_MARK, STDOUT_MARK};

// ── Errors ────────────────────────────────────────────────────────────────────

/// Malformed or unknown arguments. Recoverable only by re-invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("bad usage: unknown option: {0}")]
    UnknownLongOption(String),
    #[error("bad usage: unrecognised option: -{0}")]
    UnknownShortFlag(char),
    #[error("bad usage: -{0} requires a numeric argument")]
    MissingNumber(char),
    #[error("bad usage: block size ID must be between {min} and {max}, got {0}", min = BLOCKSIZEID_MIN, max = BLOCKSIZEID_MAX)]
    BlockSizeId(u32),
    #[error("bad usage: block size must be >= {min} bytes when > {max}, got {0}", min = BLOCKSIZE_EXPLICIT_MIN, max = BLOCKSIZEID_MAX)]
    BlockSizeBytes(u32),
    #[error("bad usage: compression level {0} exceeds maximum {max}", max = CLEVEL_MAX)]
    LevelTooHigh(u32),
    #[error("bad usage: {0} won't be used: only one output filename is accepted (use -m for multiple inputs)")]
    ExtraOutput(String),
    #[error("bad usage: multiple input files requested but no filename given")]
    NoInputFiles,
}

// ── Public output types ───────────────────────────────────────────────────────

/// Sparse output policy (`--sparse` / `--no-sparse`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SparseMode {
    /// Holes for regular-file outputs; stdout is written densely.
    #[default]
    Auto,
    /// `--sparse`: same as `Auto`, and reported when stdout cannot honour it.
    Enabled,
    /// Forced off.
    Disabled,
}

/// Boolean and enumerated switches collected from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Overwrite existing destination files (`-f`, `--force`).
    pub force_overwrite: bool,
    /// Delete the source after a successful operation (`--rm`).
    pub remove_src_file: bool,
    /// Write to stdout even when it is a console (`-c`).
    pub force_stdout: bool,
    /// Linked blocks (`-BD`).
    pub block_dependency: bool,
    /// Per-block checksums (`-BX`).
    pub block_checksum: bool,
    /// Stream checksum turned off (`--no-frame-crc`).
    pub stream_checksum_disabled: bool,
    /// Original size recorded in the frame (`--content-size`).
    pub content_size: bool,
    /// Sparse output policy.
    pub sparse: SparseMode,
    /// Legacy format requested (`-l`).
    pub legacy_format: bool,
    /// Walk directories (`-r`).
    pub recursive: bool,
    /// Every positional is an input (`-m`, implied by `-r` and `-b`).
    pub multiple_inputs: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            force_overwrite: false,
            remove_src_file: false,
            force_stdout: false,
            block_dependency: false,
            block_checksum: false,
            stream_checksum_disabled: false,
            content_size: false,
            sparse: SparseMode::Auto,
            legacy_format: false,
            recursive: false,
            multiple_inputs: false,
        }
    }
}

/// Immutable result of option resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Requested operation; `Auto` is resolved per input at execution time.
    pub mode: OpMode,
    /// Compression level (1 = fast default, 9 = high-compression preset).
    pub compression_level: u32,
    /// Upper bound of the benchmark level range (`-e#`).
    pub compression_level_last: Option<u32>,
    /// Benchmark duration in seconds (`-i#`).
    pub bench_seconds: u32,
    /// Preset block size ID in `[4, 7]`.
    pub block_size_id: u32,
    /// Block size in bytes, from the preset or an explicit `-B#` ≥ 32.
    pub block_size: usize,
    pub flags: Flags,
    /// 0 = silent … 4 = informational.
    pub verbosity: u32,
    /// Input filenames in command-line order; empty means standard input.
    pub input_paths: Vec<String>,
    /// Explicit output destination, if any.
    pub output_path: Option<String>,
    /// Program name for usage text.
    pub exe_name: String,
    /// Suffix rules used for naming and `Auto` resolution.
    pub extensions: ExtensionPolicy,
}

impl ResolvedConfig {
    /// Returns `true` when the level selects the high-compression preset.
    pub fn is_high_compression(&self) -> bool {
        self.compression_level >= CLEVEL_HC_MIN
    }
}

/// What the caller should do after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Execute the resolved configuration.
    Run(ResolvedConfig),
    /// Print help (`-h`, `--help`) and exit successfully.
    Help,
    /// Print long help (`-H`) and exit successfully.
    LongHelp,
    /// Print the version banner (`-V`, `--version`) and exit successfully.
    Version,
}

// ── Public API ─────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` (skipping argv[0]) using `init` as the starting state.
pub fn parse_args(init: CliInit) -> Result<ParseOutcome, UsageError> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(init, &argv)
}

/// Parse an explicit argument list (argv[1..]) using `init` as the starting state.
pub fn parse_args_from(init: CliInit, argv: &[String]) -> Result<ParseOutcome, UsageError> {
    let CliInit {
        exe_name,
        op_mode: init_op_mode,
        c_level: init_c_level,
        display_level: init_display_level,
        multiple_inputs: init_multiple_inputs,
        force_stdout: init_force_stdout,
        force_overwrite: init_force_overwrite,
        extensions,
    } = init;

    // --- Mutable parsing state ---
    let mut op_mode = init_op_mode;
    let mut c_level = init_c_level.min(CLEVEL_MAX);
    let mut c_level_last: Option<u32> = None;
    let mut bench_seconds = BENCH_SECONDS_DEFAULT;
    let mut block_size_id = BLOCKSIZEID_DEFAULT;
    let mut block_size = block_size_from_id(BLOCKSIZEID_DEFAULT);
    let mut flags = Flags {
        force_overwrite: init_force_overwrite,
        force_stdout: init_force_stdout,
        multiple_inputs: init_multiple_inputs,
        ..Flags::default()
    };
    let mut verbosity = init_display_level;
    let mut explicit_multiple = false;
    let mut all_arguments_are_files = false;
    let mut positionals: Vec<String> = Vec::new();

    // ── Main argument loop ──────────────────────────────────────────────────

    for argument in argv {
        if argument.is_empty() {
            continue;
        }

        let bytes = argument.as_bytes();

        // ── Positional (or end-of-options forced by `--`) ────────────────────
        if all_arguments_are_files || bytes[0] != b'-' || bytes.len() == 1 {
            positionals.push(argument.clone());
            continue;
        }

        // ── Long options (`--...`) ────────────────────────────────────────────
        if bytes[1] == b'-' {
            match argument.as_str() {
                "--" => all_arguments_are_files = true,
                "--compress" => op_mode = OpMode::Compress,
                "--decompress" | "--uncompress" => op_mode = OpMode::Decompress,
                "--test" => op_mode = OpMode::Test,
                "--multiple" => {
                    flags.multiple_inputs = true;
                    explicit_multiple = true;
                }
                "--force" => flags.force_overwrite = true,
                "--no-force" => flags.force_overwrite = false,
                "--keep" => flags.remove_src_file = false,
                "--rm" => flags.remove_src_file = true,
                "--stdout" | "--to-stdout" => flags.force_stdout = true,
                "--frame-crc" => flags.stream_checksum_disabled = false,
                "--no-frame-crc" => flags.stream_checksum_disabled = true,
                "--content-size" => flags.content_size = true,
                "--no-content-size" => flags.content_size = false,
                "--sparse" => flags.sparse = SparseMode::Enabled,
                "--no-sparse" => flags.sparse = SparseMode::Disabled,
                "--verbose" => verbosity = verbosity.saturating_add(1),
                "--quiet" => verbosity = verbosity.saturating_sub(1),
                "--version" => return Ok(ParseOutcome::Version),
                "--help" => return Ok(ParseOutcome::Help),
                _ => return Err(UsageError::UnknownLongOption(argument.clone())),
            }
            continue;
        }

        // ── Short options (possibly aggregated, e.g. `-9fv`) ─────────────────
        //
        // `char_pos` starts at 1 (the first flag character after `-`).

        let mut char_pos: usize = 1;
        while char_pos < bytes.len() {
            // ── Numeric compression level (`-0` … `-12`) ─────────────────────
            if let Some((val, next)) = read_number_at(argument, char_pos) {
                c_level = checked_level(val)?;
                char_pos = next;
                continue;
            }

            match bytes[char_pos] {
                b'V' => return Ok(ParseOutcome::Version),
                b'h' => return Ok(ParseOutcome::Help),
                b'H' => return Ok(ParseOutcome::LongHelp),
                b'z' => op_mode = OpMode::Compress,
                b'd' => op_mode = OpMode::Decompress,
                b't' => op_mode = OpMode::Test,
                b'b' => {
                    // `-b[#]`: benchmark, optionally at level #.
                    op_mode = OpMode::Bench;
                    flags.multiple_inputs = true;
                    if let Some((val, next)) = read_number_at(argument, char_pos + 1) {
                        c_level = checked_level(val)?;
                        char_pos = next;
                        continue;
                    }
                }
                b'e' => {
                    // `-e#`: upper bound of the benchmark level range.
                    let (val, next) = read_number_at(argument, char_pos + 1)
                        .ok_or(UsageError::MissingNumber('e'))?;
                    c_level_last = Some(checked_level(val)?);
                    char_pos = next;
                    continue;
                }
                b'i' => {
                    // `-i#`: benchmark duration in seconds.
                    let (val, next) = read_number_at(argument, char_pos + 1)
                        .ok_or(UsageError::MissingNumber('i'))?;
                    bench_seconds = val;
                    char_pos = next;
                    continue;
                }
                b'f' => flags.force_overwrite = true,
                b'k' => flags.remove_src_file = false,
                b'c' => flags.force_stdout = true,
                b'l' => flags.legacy_format = true,
                b'm' => {
                    flags.multiple_inputs = true;
                    explicit_multiple = true;
                }
                b'r' => {
                    // -r also implies -m: treat positional arguments as input files.
                    flags.recursive = true;
                    flags.multiple_inputs = true;
                    explicit_multiple = true;
                }
                b'v' => verbosity = verbosity.saturating_add(1),
                b'q' => verbosity = verbosity.saturating_sub(1),
                b'B' => {
                    // Block sub-options: size ID (4–7), raw byte count (≥32),
                    // linked/independent mode (D/I), and block checksum (X).
                    let mut j = char_pos + 1;
                    while j < bytes.len() {
                        match bytes[j] {
                            b'D' => {
                                flags.block_dependency = true;
                                j += 1;
                            }
                            b'I' => {
                                flags.block_dependency = false;
                                j += 1;
                            }
                            b'X' => {
                                flags.block_checksum = true;
                                j += 1;
                            }
                            c if c.is_ascii_digit() => {
                                let (b_val, next) = read_number_at(argument, j)
                                    .ok_or(UsageError::MissingNumber('B'))?;
                                j = next;
                                if b_val < BLOCKSIZEID_MIN {
                                    return Err(UsageError::BlockSizeId(b_val));
                                }
                                if b_val <= BLOCKSIZEID_MAX {
                                    block_size_id = b_val;
                                    block_size = block_size_from_id(b_val);
                                } else {
                                    if b_val < BLOCKSIZE_EXPLICIT_MIN {
                                        return Err(UsageError::BlockSizeBytes(b_val));
                                    }
                                    block_size = b_val as usize;
                                }
                            }
                            _ => break, // not a block sub-option; resume normal flags
                        }
                    }
                    char_pos = j;
                    continue;
                }
                _ => {
                    let c = argument[char_pos..].chars().next().unwrap_or('?');
                    return Err(UsageError::UnknownShortFlag(c));
                }
            }

            char_pos += 1;
        }
    }

    // ── Positional resolution ───────────────────────────────────────────────

    let (input_paths, output_path) = if flags.multiple_inputs {
        if positionals.is_empty() && explicit_multiple {
            return Err(UsageError::NoInputFiles);
        }
        let inputs = positionals
            .into_iter()
            .map(|p| if p == "-" { STDIN_MARK.to_owned() } else { p })
            .collect();
        let output = flags.force_stdout.then(|| STDOUT_MARK.to_owned());
        (inputs, output)
    } else {
        let mut iter = positionals.into_iter();
        let input = iter.next();
        let output = iter.next();
        if let Some(extra) = iter.next() {
            return Err(UsageError::ExtraOutput(extra));
        }
        let output = if flags.force_stdout {
            if let Some(extra) = output {
                return Err(UsageError::ExtraOutput(extra));
            }
            Some(STDOUT_MARK.to_owned())
        } else {
            output.map(|o| match o.as_str() {
                "-" => STDOUT_MARK.to_owned(),
                NULL_OUTPUT => NUL_MARK.to_owned(),
                _ => o,
            })
        };
        let inputs = input
            .map(|i| if i == "-" { STDIN_MARK.to_owned() } else { i })
            .into_iter()
            .collect();
        (inputs, output)
    };

    Ok(ParseOutcome::Run(ResolvedConfig {
        mode: op_mode,
        compression_level: c_level,
        compression_level_last: c_level_last,
        bench_seconds,
        block_size_id,
        block_size,
        flags,
        verbosity,
        input_paths,
        output_path,
        exe_name,
        extensions,
    }))
}

// ── Private helpers ────────────────────────────────────────────────────────────

/// Reads the digit run starting at byte `pos` of `argument`.
///
/// Returns the parsed value and the byte position just past the last digit,
/// or `None` when `pos` is not a digit.
fn read_number_at(argument: &str, pos: usize) -> Option<(u32, usize)> {
    if !argument.as_bytes().get(pos)?.is_ascii_digit() {
        return None;
    }
    let (val, rest) = read_u32_from_str(&argument[pos..])?;
    Some((val, argument.len() - rest.len()))
}

fn checked_level(level: u32) -> Result<u32, UsageError> {
    if level > CLEVEL_MAX {
        return Err(UsageError::LevelTooHigh(level));
    }
    Ok(level)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
