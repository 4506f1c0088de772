// e2e/error_handling.rs: failure paths of the `lz4` binary.
//
// Each malformed input must produce a non-zero exit status, a diagnostic on
// stderr and no output file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn lz4_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz4"))
}

fn decode_to(input: &Path, output: &Path) -> Output {
    Command::new(lz4_bin())
        .args(["-d", input.to_str().unwrap(), output.to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .expect("spawn lz4")
}

fn assert_only_input_left(dir: &TempDir) {
    assert_eq!(
        fs::read_dir(dir.path()).unwrap().count(),
        1,
        "no output or temporary may be left behind"
    );
}

#[test]
fn truncated_header_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("short.lz4");
    let output = dir.path().join("short");
    fs::write(&input, [12u8, 0, 0, 0]).unwrap();

    let out = decode_to(&input, &output);
    assert_eq!(out.status.code(), Some(3));
    assert!(!out.stderr.is_empty());
    assert_only_input_left(&dir);
}

#[test]
fn size_mismatch_exits_three() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("long.lz4");
    let output = dir.path().join("long");
    let mut bytes = vec![12u8, 0, 0, 0, 11, 0, 0, 0, 0xB0];
    bytes.extend_from_slice(b"hello world");
    bytes.extend_from_slice(b"trailing garbage");
    fs::write(&input, bytes).unwrap();

    let out = decode_to(&input, &output);
    assert_eq!(out.status.code(), Some(3));
    assert_only_input_left(&dir);
}

#[test]
fn corrupt_block_exits_four() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("corrupt.lz4");
    let output = dir.path().join("corrupt");
    // Literal length 15+255+… runs past the end of the payload.
    fs::write(&input, [3u8, 0, 0, 0, 64, 0, 0, 0, 0xF0, 0xFF, 0x10]).unwrap();

    let out = decode_to(&input, &output);
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Corrupted input"));
    assert_only_input_left(&dir);
}

#[test]
fn oversized_declared_length_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("huge.lz4");
    let output = dir.path().join("huge");
    // One payload byte claiming a 512 MiB output.
    fs::write(&input, [1u8, 0, 0, 0, 0, 0, 0, 0x20, 0x00]).unwrap();

    let out = decode_to(&input, &output);
    assert_eq!(out.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&out.stderr).contains("more than a 1-byte block"));
    assert_only_input_left(&dir);
}

#[test]
fn missing_input_exits_two() {
    let dir = TempDir::new().unwrap();
    let out = decode_to(&dir.path().join("absent.lz4"), &dir.path().join("absent"));
    assert_eq!(out.status.code(), Some(2));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn unknown_option_exits_one() {
    let out = Command::new(lz4_bin())
        .arg("-y")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("bad usage"));
    assert!(stderr.contains("Incorrect parameters"));
}

#[test]
fn level_above_twelve_is_usage_error() {
    let out = Command::new(lz4_bin())
        .args(["-13", "x"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn benchmark_request_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("f");
    fs::write(&input, b"data").unwrap();
    let out = Command::new(lz4_bin())
        .args(["-b1", input.to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn quiet_twice_silences_errors() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("short.lz4");
    fs::write(&input, [1u8, 2]).unwrap();
    let out = Command::new(lz4_bin())
        .args(["-qq", "-d", input.to_str().unwrap(), dir.path().join("o").to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stderr.is_empty());
}
