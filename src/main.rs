//! Binary entry point for the `lz4` command-line tool.
//!
//! Handles post-parse validation, recursive directory expansion, automatic
//! output filename resolution and operation dispatch (compress, decompress,
//! test).
//!
//! # Control flow
//!
//! 1. [`detect_alias`] inspects `argv[0]` to infer an initial mode
//!    (e.g. `unlz4` implies decompress).
//! 2. [`parse_args`] processes all flags and yields a [`ResolvedConfig`].
//! 3. [`run`] dispatches to the file drivers and returns the exit code.
//!
//! Exit codes: 0 success, 1 usage error, otherwise the code of the first
//! failing file (2 I/O, 3 format, 4 decode, 5 allocation).

use std::io::IsTerminal;
use std::slice;

use anyhow::{Context, Result};

use lz4cli::cli::args::{parse_args, ParseOutcome, ResolvedConfig};
use lz4cli::cli::constants::{
    welcome_message, DISPLAY_ERRORS, DISPLAY_FORCED, DISPLAY_INFO, DISPLAY_NORMAL, KB,
};
use lz4cli::cli::help::{print_bad_usage, print_long_help, print_usage, print_usage_advanced};
use lz4cli::cli::init::detect_alias;
use lz4cli::cli::op_mode::{determine_op_mode, OpMode};
use lz4cli::config::{block_size_from_id, BLOCKSIZEID_DEFAULT};
use lz4cli::io::{
    compress_filename, compress_multiple_filenames, decompress_filename,
    decompress_multiple_filenames, report_failure, BatchSummary, Prefs, NUL_MARK, STDIN_MARK,
    STDOUT_MARK,
};
use lz4cli::util::create_file_list;
use lz4cli::{displaylevel, displayout};

/// Exit status for usage errors and refused console I/O.
const EXIT_USAGE: i32 = 1;
/// Exit status when directory expansion fails.
const EXIT_IO: i32 = 2;

// ── Post-parse dispatch ───────────────────────────────────────────────────────

/// Execute the operation selected by argument parsing.
fn run(mut cfg: ResolvedConfig) -> i32 {
    let mut display_level = cfg.verbosity;
    displaylevel!(display_level, DISPLAY_FORCED, "{}\n", welcome_message());

    if cfg.mode == OpMode::Compress || cfg.mode == OpMode::Bench {
        displaylevel!(display_level, DISPLAY_INFO, "Blocks size : {} KB\n", cfg.block_size / KB);
    }

    if cfg.mode == OpMode::Bench {
        displaylevel!(
            display_level,
            DISPLAY_ERRORS,
            "benchmark mode is not available in this build\n"
        );
        return EXIT_USAGE;
    }

    // ── Recursive directory expansion ──────────────────────────────────────
    if cfg.flags.recursive {
        match expand_inputs(&cfg.input_paths) {
            Ok(list) => {
                for (u, p) in list.iter().enumerate() {
                    displaylevel!(display_level, DISPLAY_INFO, "{} {}\n", u, p);
                }
                cfg.input_paths = list;
            }
            Err(e) => {
                displaylevel!(display_level, DISPLAY_ERRORS, "{}: {:#}\n", cfg.exe_name, e);
                return EXIT_IO;
            }
        }
    }

    let multiple_inputs = cfg.flags.multiple_inputs && !cfg.input_paths.is_empty();
    let input = cfg
        .input_paths
        .first()
        .cloned()
        .unwrap_or_else(|| STDIN_MARK.to_owned());
    let mut output = cfg.output_path.clone();
    let mut mode = cfg.mode;

    // ── Test mode never opens a destination ─────────────────────────────────
    if mode == OpMode::Test {
        output = Some(NUL_MARK.to_owned());
    }

    // ── Refuse stdin from console ──────────────────────────────────────────
    let reads_stdin = if multiple_inputs {
        cfg.input_paths.iter().any(|p| p == STDIN_MARK)
    } else {
        input == STDIN_MARK
    };
    if reads_stdin && std::io::stdin().is_terminal() {
        displaylevel!(display_level, DISPLAY_ERRORS, "refusing to read from a console\n");
        return EXIT_USAGE;
    }

    // ── Auto stdout when reading stdin ─────────────────────────────────────
    if !multiple_inputs && input == STDIN_MARK && output.is_none() {
        output = Some(STDOUT_MARK.to_owned());
    }

    // ── Auto output filename ───────────────────────────────────────────────
    if output.is_none() && !multiple_inputs {
        if mode == OpMode::Auto {
            mode = determine_op_mode(&input, &cfg.extensions, cfg.flags.legacy_format);
        }
        match mode {
            OpMode::Compress => {
                let suffix = cfg.extensions.compress_suffix(cfg.flags.legacy_format);
                let out = format!("{input}{suffix}");
                displaylevel!(
                    display_level,
                    DISPLAY_NORMAL,
                    "Compressed filename will be : {} \n",
                    out
                );
                output = Some(out);
            }
            OpMode::Decompress => {
                match cfg
                    .extensions
                    .strip_suffix(&input, cfg.flags.legacy_format)
                    .filter(|base| !base.is_empty())
                {
                    Some(base) => {
                        displaylevel!(display_level, DISPLAY_NORMAL, "Decoding file {} \n", base);
                        output = Some(base.to_owned());
                    }
                    None => {
                        displaylevel!(
                            display_level,
                            DISPLAY_ERRORS,
                            "Cannot determine an output filename \n"
                        );
                        if display_level >= DISPLAY_ERRORS {
                            print_usage(&cfg.exe_name);
                        }
                        return EXIT_USAGE;
                    }
                }
            }
            _ => {}
        }
    }

    // ── Refuse console output ──────────────────────────────────────────────
    let to_stdout = output.as_deref() == Some(STDOUT_MARK);
    if to_stdout && std::io::stdout().is_terminal() && !cfg.flags.force_stdout {
        displaylevel!(
            display_level,
            DISPLAY_ERRORS,
            "refusing to write to console without -c \n"
        );
        return EXIT_USAGE;
    }

    // ── Display level downgrade ────────────────────────────────────────────
    if (to_stdout || multiple_inputs) && display_level == DISPLAY_NORMAL {
        display_level = DISPLAY_ERRORS;
    }

    // ── Auto-determine mode from extension (single input) ──────────────────
    if mode == OpMode::Auto && !multiple_inputs {
        mode = determine_op_mode(&input, &cfg.extensions, cfg.flags.legacy_format);
    }

    if mode == OpMode::Compress || (mode == OpMode::Auto && multiple_inputs) {
        report_ignored_options(&cfg, display_level);
    }

    let prefs = Prefs::from_config(&cfg, display_level);

    // ── Operation dispatch ─────────────────────────────────────────────────
    if multiple_inputs {
        let dst_mark = output.as_deref();
        let summary = match mode {
            OpMode::Compress => compress_multiple_filenames(&cfg.input_paths, dst_mark, &prefs),
            OpMode::Decompress | OpMode::Test => {
                decompress_multiple_filenames(&cfg.input_paths, dst_mark, &prefs)
            }
            _ => run_auto_batch(&cfg.input_paths, dst_mark, &prefs),
        };
        return summary.exit_code();
    }

    let output = output.unwrap_or_else(|| STDOUT_MARK.to_owned());
    let result = match mode {
        OpMode::Decompress | OpMode::Test => decompress_filename(&input, &output, &prefs),
        _ => compress_filename(&input, &output, &prefs),
    };
    match result {
        Ok(_) => 0,
        Err(e) => {
            report_failure(prefs.display_level, &input, &e);
            e.exit_code()
        }
    }
}

/// Expands `-r` directory arguments into the files they contain.
fn expand_inputs(inputs: &[String]) -> Result<Vec<String>> {
    let list = create_file_list(inputs).context("cannot expand directory arguments")?;
    Ok(list)
}

/// Multiple inputs without an explicit mode: each file is decompressed when
/// it carries a container suffix and compressed otherwise.
fn run_auto_batch(srcs: &[String], dst_mark: Option<&str>, prefs: &Prefs) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for src in srcs {
        let one = slice::from_ref(src);
        let part = match determine_op_mode(src, &prefs.extensions, prefs.legacy_format) {
            OpMode::Decompress => decompress_multiple_filenames(one, dst_mark, prefs),
            _ => compress_multiple_filenames(one, dst_mark, prefs),
        };
        summary.merge(part);
    }
    summary
}

/// Reports options that only make sense for the LZ4 frame format.
fn report_ignored_options(cfg: &ResolvedConfig, display_level: u32) {
    let flags = &cfg.flags;
    let ignored = [
        (flags.block_checksum, "block checksum (-BX)"),
        (flags.stream_checksum_disabled, "--no-frame-crc"),
        (flags.content_size, "--content-size"),
        (flags.block_dependency, "block dependency (-BD)"),
        (
            cfg.block_size_id != BLOCKSIZEID_DEFAULT
                || cfg.block_size != block_size_from_id(BLOCKSIZEID_DEFAULT),
            "block size (-B#)",
        ),
    ];
    for (_, name) in ignored.iter().filter(|(set, _)| *set) {
        displaylevel!(
            display_level,
            DISPLAY_FORCED,
            "{} has no effect: containers hold a single raw block\n",
            name
        );
    }
    if cfg.is_high_compression() {
        displaylevel!(
            display_level,
            DISPLAY_FORCED,
            "compression level {} is advisory: blocks use the fast encoder\n",
            cfg.compression_level
        );
    }
    if flags.legacy_format && cfg.extensions.legacy.is_none() {
        displaylevel!(
            display_level,
            DISPLAY_INFO,
            "-l has no effect on naming: no legacy extension configured\n"
        );
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let argv0 = std::env::args().next().unwrap_or_else(|| "lz4".to_owned());
    let init = detect_alias(&argv0);
    let exe_name = init.exe_name.clone();
    let init_display_level = init.display_level;

    let exit_code = match parse_args(init) {
        Ok(ParseOutcome::Run(cfg)) => run(cfg),
        Ok(ParseOutcome::Help) => {
            print_usage_advanced(&exe_name);
            0
        }
        Ok(ParseOutcome::LongHelp) => {
            print_long_help(&exe_name);
            0
        }
        Ok(ParseOutcome::Version) => {
            displayout!("{}\n", welcome_message());
            0
        }
        Err(e) => {
            print_bad_usage(&exe_name, &e, init_display_level);
            EXIT_USAGE
        }
    };
    std::process::exit(exit_code);
}
