// Integration tests for src/main.rs: post-parse validation and dispatch.
//
// `run()` is private to the `lz4` binary, so every test drives the compiled
// binary through `std::process::Command`. Cargo provides its path in
// `CARGO_BIN_EXE_lz4`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn lz4_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz4"))
}

/// Runs the binary in `dir` with stdin closed.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(lz4_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .expect("spawn lz4")
}

fn setup(name: &str, content: &[u8]) -> TempDir {
    let dir = TempDir::new().expect("TempDir::new");
    fs::write(dir.path().join(name), content).expect("write input");
    dir
}

fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Automatic output names
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn auto_mode_compresses_plain_file_to_lz4_suffix() {
    let dir = setup("notes.txt", b"auto mode picks compression for this file");
    let out = run_in(dir.path(), &["notes.txt"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert!(dir.path().join("notes.txt.lz4").exists());
    assert!(dir.path().join("notes.txt").exists(), "source is kept by default");
}

#[test]
fn auto_mode_decompresses_lz4_suffix() {
    let dir = setup("notes.txt", b"round trip through auto mode");
    assert_eq!(run_in(dir.path(), &["notes.txt"]).status.code(), Some(0));
    fs::remove_file(dir.path().join("notes.txt")).unwrap();

    let out = run_in(dir.path(), &["notes.txt.lz4"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert_eq!(
        fs::read(dir.path().join("notes.txt")).unwrap(),
        b"round trip through auto mode"
    );
}

#[test]
fn auto_mode_with_explicit_output_still_detects_container() {
    let dir = setup("a.txt", b"explicit output, inferred mode");
    assert_eq!(run_in(dir.path(), &["a.txt"]).status.code(), Some(0));

    let out = run_in(dir.path(), &["a.txt.lz4", "restored.txt"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert_eq!(
        fs::read(dir.path().join("restored.txt")).unwrap(),
        b"explicit output, inferred mode"
    );
}

#[test]
fn decompress_without_suffix_cannot_name_output() {
    let dir = setup("data.bin", b"whatever");
    let out = run_in(dir.path(), &["-d", "data.bin"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("Cannot determine an output filename"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Overwrite protection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn existing_output_is_not_overwritten_without_force() {
    let dir = setup("in.txt", b"new content");
    fs::write(dir.path().join("in.txt.lz4"), b"precious").unwrap();

    let out = run_in(dir.path(), &["-z", "in.txt"]);
    assert_eq!(out.status.code(), Some(2), "stderr: {}", stderr_of(&out));
    assert_eq!(fs::read(dir.path().join("in.txt.lz4")).unwrap(), b"precious");
}

#[test]
fn force_replaces_existing_output() {
    let dir = setup("in.txt", b"new content");
    fs::write(dir.path().join("in.txt.lz4"), b"stale").unwrap();

    let out = run_in(dir.path(), &["-zf", "in.txt"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert_ne!(fs::read(dir.path().join("in.txt.lz4")).unwrap(), b"stale");
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiple inputs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn multiple_auto_routes_each_file() {
    let dir = setup("one.txt", b"first");
    fs::write(dir.path().join("two.txt"), b"second").unwrap();
    assert_eq!(run_in(dir.path(), &["two.txt"]).status.code(), Some(0));
    fs::remove_file(dir.path().join("two.txt")).unwrap();

    // one.txt is compressed, two.txt.lz4 is decompressed.
    let out = run_in(dir.path(), &["-m", "one.txt", "two.txt.lz4"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert!(dir.path().join("one.txt.lz4").exists());
    assert_eq!(fs::read(dir.path().join("two.txt")).unwrap(), b"second");
}

#[test]
fn multiple_decompress_skips_files_without_suffix() {
    let dir = setup("plain.bin", b"not a container name");
    let out = run_in(dir.path(), &["-d", "-m", "plain.bin"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("will not process file: plain.bin"));
}

#[test]
fn multiple_reports_first_failure_code() {
    let dir = setup("good.txt", b"fine");
    let out = run_in(dir.path(), &["-z", "-m", "missing.txt", "good.txt"]);
    assert_eq!(out.status.code(), Some(2));
    // The remaining files are still processed.
    assert!(dir.path().join("good.txt.lz4").exists());
}

// ─────────────────────────────────────────────────────────────────────────────
// Recursive expansion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn recursive_compresses_nested_files() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("tree").join("sub");
    fs::create_dir_all(&nested).unwrap();
    fs::write(dir.path().join("tree").join("a.txt"), b"a").unwrap();
    fs::write(nested.join("b.txt"), b"b").unwrap();

    let out = run_in(dir.path(), &["-z", "-r", "tree"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert!(dir.path().join("tree").join("a.txt.lz4").exists());
    assert!(nested.join("b.txt.lz4").exists());
}

#[test]
fn recursive_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &["-r", "no_such_dir"]);
    assert_eq!(out.status.code(), Some(2));
}

// ─────────────────────────────────────────────────────────────────────────────
// Other modes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bench_is_refused() {
    let dir = setup("f", b"bench me");
    let out = run_in(dir.path(), &["-b", "f"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("benchmark mode is not available"));
}

#[test]
fn bad_usage_exits_one() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &["--definitely-not-an-option"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("bad usage"));
}

#[test]
fn long_help_describes_default_output_naming() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &["-H"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stderr_of(&out);
    assert!(text.contains("if [input] is standard input, then [output] = stdout"));
    assert!(!text.contains("if stdout is not the console"));
}

#[test]
fn file_input_with_piped_stdout_still_names_output_file() {
    // Stdout is a pipe here; the output name is still derived from the input.
    let dir = setup("piped.txt", b"stdout is not a console in this test");
    let out = run_in(dir.path(), &["-z", "piped.txt"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert!(out.stdout.is_empty());
    assert!(dir.path().join("piped.txt.lz4").exists());
}

#[test]
fn help_exits_zero_with_usage_on_stderr() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &["-h"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stderr_of(&out).contains("Usage"));
    assert!(out.stdout.is_empty());
}
