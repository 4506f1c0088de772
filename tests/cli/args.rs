// Integration tests for the option resolver (src/cli/args.rs).
//
// Exercised through the public `parse_args_from` entry point only; nothing
// here touches the filesystem or the process environment.

use lz4cli::cli::args::{parse_args_from, ParseOutcome, ResolvedConfig, SparseMode, UsageError};
use lz4cli::cli::init::CliInit;
use lz4cli::cli::op_mode::{ExtensionPolicy, OpMode};
use lz4cli::config::{BENCH_SECONDS_DEFAULT, CLEVEL_DEFAULT, DISPLAY_LEVEL_DEFAULT};
use lz4cli::io::{NUL_MARK, STDIN_MARK, STDOUT_MARK};

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn resolve(args: &[&str]) -> Result<ParseOutcome, UsageError> {
    let init = CliInit::with_defaults("lz4", CLEVEL_DEFAULT, ExtensionPolicy::default());
    parse_args_from(init, &argv(args))
}

fn run_config(args: &[&str]) -> ResolvedConfig {
    match resolve(args).expect("arguments should resolve") {
        ParseOutcome::Run(cfg) => cfg,
        other => panic!("expected Run, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn no_arguments_yields_defaults() {
    let cfg = run_config(&[]);
    assert_eq!(cfg.mode, OpMode::Auto);
    assert_eq!(cfg.compression_level, CLEVEL_DEFAULT);
    assert_eq!(cfg.bench_seconds, BENCH_SECONDS_DEFAULT);
    assert_eq!(cfg.verbosity, DISPLAY_LEVEL_DEFAULT);
    assert!(cfg.input_paths.is_empty());
    assert!(cfg.output_path.is_none());
    assert_eq!(cfg.flags.sparse, SparseMode::Auto);
    assert!(!cfg.flags.remove_src_file);
}

#[test]
fn empty_tokens_are_ignored() {
    let cfg = run_config(&["", "in.txt", ""]);
    assert_eq!(cfg.input_paths, vec!["in.txt"]);
    assert!(cfg.output_path.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Long options
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn long_mode_options() {
    assert_eq!(run_config(&["--decompress"]).mode, OpMode::Decompress);
    assert_eq!(run_config(&["--uncompress"]).mode, OpMode::Decompress);
    assert_eq!(run_config(&["--compress"]).mode, OpMode::Compress);
    assert_eq!(run_config(&["--test"]).mode, OpMode::Test);
}

#[test]
fn force_and_no_force_last_wins() {
    assert!(run_config(&["--no-force", "--force"]).flags.force_overwrite);
    assert!(!run_config(&["-f", "--no-force"]).flags.force_overwrite);
}

#[test]
fn rm_and_keep_last_wins() {
    assert!(run_config(&["--rm"]).flags.remove_src_file);
    assert!(!run_config(&["--rm", "--keep"]).flags.remove_src_file);
    assert!(!run_config(&["--rm", "-k"]).flags.remove_src_file);
}

#[test]
fn sparse_options() {
    assert_eq!(run_config(&["--sparse"]).flags.sparse, SparseMode::Enabled);
    assert_eq!(run_config(&["--no-sparse"]).flags.sparse, SparseMode::Disabled);
}

#[test]
fn frame_only_options_are_recorded() {
    let cfg = run_config(&["--no-frame-crc", "--content-size", "-BX"]);
    assert!(cfg.flags.stream_checksum_disabled);
    assert!(cfg.flags.content_size);
    assert!(cfg.flags.block_checksum);
}

#[test]
fn verbose_and_quiet_adjust_verbosity() {
    assert_eq!(run_config(&["--verbose"]).verbosity, DISPLAY_LEVEL_DEFAULT + 1);
    assert_eq!(run_config(&["--quiet", "-q"]).verbosity, DISPLAY_LEVEL_DEFAULT - 2);
    assert_eq!(run_config(&["-vv", "-q"]).verbosity, DISPLAY_LEVEL_DEFAULT + 1);
}

#[test]
fn repeated_verbose_never_decreases() {
    let mut previous = 0;
    for n in 0..=20 {
        let tokens: Vec<&str> = std::iter::repeat("-v").take(n).collect();
        let level = run_config(&tokens).verbosity;
        assert_eq!(level, DISPLAY_LEVEL_DEFAULT + n as u32);
        assert!(level >= previous);
        previous = level;
    }
    let joined = format!("-{}", "v".repeat(20));
    assert_eq!(run_config(&[joined.as_str()]).verbosity, previous);
}

#[test]
fn unknown_long_option_names_the_token() {
    let err = resolve(&["--bogus"]).unwrap_err();
    assert_eq!(err, UsageError::UnknownLongOption("--bogus".to_owned()));
    assert!(err.to_string().starts_with("bad usage: "));
}

#[test]
fn version_and_help_outcomes() {
    assert_eq!(resolve(&["-V"]).unwrap(), ParseOutcome::Version);
    assert_eq!(resolve(&["--version"]).unwrap(), ParseOutcome::Version);
    assert_eq!(resolve(&["--help"]).unwrap(), ParseOutcome::Help);
    assert_eq!(resolve(&["-H"]).unwrap(), ParseOutcome::LongHelp);
}

#[test]
fn version_stops_before_later_errors() {
    assert_eq!(resolve(&["-V", "-y"]).unwrap(), ParseOutcome::Version);
}

// ─────────────────────────────────────────────────────────────────────────────
// Positionals
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn input_and_output() {
    let cfg = run_config(&["-d", "in.lz4", "out.bin"]);
    assert_eq!(cfg.mode, OpMode::Decompress);
    assert_eq!(cfg.input_paths, vec!["in.lz4"]);
    assert_eq!(cfg.output_path.as_deref(), Some("out.bin"));
}

#[test]
fn null_output_maps_to_nul_mark() {
    let cfg = run_config(&["in", "null"]);
    assert_eq!(cfg.output_path.as_deref(), Some(NUL_MARK));
}

#[test]
fn single_dash_input_is_stdin() {
    let cfg = run_config(&["-"]);
    assert_eq!(cfg.input_paths, vec![STDIN_MARK]);
    assert!(cfg.output_path.is_none());
}

#[test]
fn double_dash_ends_options() {
    let cfg = run_config(&["--", "-weird", "-f"]);
    assert_eq!(cfg.input_paths, vec!["-weird"]);
    assert_eq!(cfg.output_path.as_deref(), Some("-f"));
    assert!(!cfg.flags.force_overwrite);
}

#[test]
fn stdout_flag_sets_output() {
    let cfg = run_config(&["-c", "in.txt"]);
    assert_eq!(cfg.output_path.as_deref(), Some(STDOUT_MARK));
    assert!(cfg.flags.force_stdout);
}

#[test]
fn stdout_flag_with_output_name_is_error() {
    assert_eq!(
        resolve(&["-c", "in.txt", "out.lz4"]).unwrap_err(),
        UsageError::ExtraOutput("out.lz4".to_owned())
    );
}

#[test]
fn multiple_inputs_collects_all_positionals() {
    let cfg = run_config(&["-m", "a", "b", "-", "c"]);
    assert!(cfg.flags.multiple_inputs);
    assert_eq!(cfg.input_paths, vec!["a", "b", STDIN_MARK, "c"]);
    assert!(cfg.output_path.is_none());
}

#[test]
fn multiple_inputs_with_stdout() {
    let cfg = run_config(&["-mc", "a", "b"]);
    assert_eq!(cfg.input_paths, vec!["a", "b"]);
    assert_eq!(cfg.output_path.as_deref(), Some(STDOUT_MARK));
}

#[test]
fn multiple_without_files_is_error() {
    assert_eq!(resolve(&["-m"]).unwrap_err(), UsageError::NoInputFiles);
    assert_eq!(resolve(&["--multiple"]).unwrap_err(), UsageError::NoInputFiles);
}

#[test]
fn recursive_implies_multiple() {
    let cfg = run_config(&["-r", "dir1", "dir2"]);
    assert!(cfg.flags.recursive);
    assert!(cfg.flags.multiple_inputs);
    assert_eq!(cfg.input_paths, vec!["dir1", "dir2"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric arguments
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn level_zero_is_accepted() {
    let cfg = run_config(&["-0"]);
    assert_eq!(cfg.compression_level, 0);
    assert!(!cfg.is_high_compression());
}

#[test]
fn bench_duration() {
    let cfg = run_config(&["-b", "-i7", "file"]);
    assert_eq!(cfg.mode, OpMode::Bench);
    assert_eq!(cfg.bench_seconds, 7);
}

#[test]
fn i_without_digits_is_error() {
    assert_eq!(resolve(&["-i"]).unwrap_err(), UsageError::MissingNumber('i'));
}

#[test]
fn overflowing_level_wraps_then_validates() {
    // 4294967297 wraps to 1, which is a valid level.
    assert_eq!(run_config(&["-4294967297"]).compression_level, 1);
}

#[test]
fn aggregated_flags_with_trailing_unknown() {
    assert_eq!(resolve(&["-fk#"]).unwrap_err(), UsageError::UnknownShortFlag('#'));
}

#[test]
fn legacy_flag_is_recorded() {
    assert!(run_config(&["-l", "x"]).flags.legacy_format);
}
