// e2e/cli_integration.rs: black-box tests of the `lz4` binary.
//
// Covers the container wire format on disk, round trips through files and
// pipes, test mode, source removal and multiple inputs.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn lz4_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz4"))
}

/// Header (12, 11) + one literal-only sequence spelling "hello world".
fn hello_container() -> Vec<u8> {
    let mut v = vec![12, 0, 0, 0, 11, 0, 0, 0, 0xB0];
    v.extend_from_slice(b"hello world");
    v
}

fn sample_text() -> Vec<u8> {
    "Hello, LZ4!\n".repeat(341).into_bytes()
}

// ── 1. Known container decodes to exact bytes ────────────────────────────────

#[test]
fn test_decode_known_container() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hello.lz4");
    let output = dir.path().join("hello.txt");
    fs::write(&input, hello_container()).unwrap();

    let status = Command::new(lz4_bin())
        .args(["-d", input.to_str().unwrap(), output.to_str().unwrap()])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to run lz4");
    assert_eq!(status.code(), Some(0));
    assert_eq!(fs::read(&output).unwrap(), b"hello world");
}

// ── 2. File round trip ───────────────────────────────────────────────────────

#[test]
fn test_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let packed = dir.path().join("packed.lz4");
    let restored = dir.path().join("restored.txt");
    fs::write(&input, sample_text()).unwrap();

    let status = Command::new(lz4_bin())
        .args(["-z", input.to_str().unwrap(), packed.to_str().unwrap()])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success(), "compress step should exit 0");

    let bytes = fs::read(&packed).unwrap();
    let compressed = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    let original = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
    assert_eq!(compressed, bytes.len() - 8);
    assert_eq!(original, sample_text().len());

    let status = Command::new(lz4_bin())
        .args(["-d", packed.to_str().unwrap(), restored.to_str().unwrap()])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success(), "decompress step should exit 0");
    assert_eq!(fs::read(&restored).unwrap(), sample_text());
}

// ── 3. Pipe round trip ───────────────────────────────────────────────────────

fn pipe_through(args: &[&str], input: &[u8]) -> (Option<i32>, Vec<u8>) {
    let mut child = Command::new(lz4_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn lz4");
    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(input).unwrap();
    }
    let out = child.wait_with_output().unwrap();
    (out.status.code(), out.stdout)
}

#[test]
fn test_stdin_stdout_roundtrip() {
    let (code, packed) = pipe_through(&["-z"], &sample_text());
    assert_eq!(code, Some(0));
    assert!(packed.len() >= 8);

    let (code, restored) = pipe_through(&["-d"], &packed);
    assert_eq!(code, Some(0));
    assert_eq!(restored, sample_text());
}

#[test]
fn test_empty_stdin_gives_bare_header() {
    let (code, packed) = pipe_through(&["-z"], b"");
    assert_eq!(code, Some(0));
    assert_eq!(packed, [0u8; 8]);

    let (code, restored) = pipe_through(&["-d"], &packed);
    assert_eq!(code, Some(0));
    assert!(restored.is_empty());
}

#[test]
fn test_stdout_flag_decodes_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hello.lz4");
    fs::write(&input, hello_container()).unwrap();

    let out = Command::new(lz4_bin())
        .args(["-dc", input.to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"hello world");
}

// ── 4. Test mode ─────────────────────────────────────────────────────────────

#[test]
fn test_integrity_check_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hello.lz4");
    fs::write(&input, hello_container()).unwrap();

    let out = Command::new(lz4_bin())
        .args(["-t", input.to_str().unwrap()])
        .current_dir(dir.path())
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

// ── 5. Source removal ────────────────────────────────────────────────────────

#[test]
fn test_rm_removes_source() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doomed.txt");
    fs::write(&input, sample_text()).unwrap();

    let status = Command::new(lz4_bin())
        .args(["--rm", "-z", input.to_str().unwrap()])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success());
    assert!(!input.exists());
    assert!(dir.path().join("doomed.txt.lz4").exists());
}

// ── 6. Multiple inputs ───────────────────────────────────────────────────────

#[test]
fn test_multiple_files() {
    let dir = TempDir::new().unwrap();
    let names = ["a.txt", "b.txt", "c.txt"];
    for (i, name) in names.iter().enumerate() {
        fs::write(dir.path().join(name), format!("file number {i}\n").repeat(50)).unwrap();
    }

    let status = Command::new(lz4_bin())
        .args(["-z", "-m"])
        .args(names)
        .current_dir(dir.path())
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success());

    for name in names {
        fs::remove_file(dir.path().join(name)).unwrap();
    }
    let packed: Vec<String> = names.iter().map(|n| format!("{n}.lz4")).collect();
    let status = Command::new(lz4_bin())
        .args(["-d", "-m"])
        .args(&packed)
        .current_dir(dir.path())
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success());

    for (i, name) in names.iter().enumerate() {
        let expected = format!("file number {i}\n").repeat(50);
        assert_eq!(fs::read_to_string(dir.path().join(name)).unwrap(), expected);
    }
}

#[test]
fn test_lz4cat_style_concatenation() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.lz4");
    fs::write(&first, hello_container()).unwrap();

    let out = Command::new(lz4_bin())
        .args(["-d", "-c", "-m", first.to_str().unwrap(), first.to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"hello worldhello world");
}

// ── 7. --version ─────────────────────────────────────────────────────────────

#[test]
fn test_version() {
    let out = Command::new(lz4_bin())
        .arg("-V")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains(env!("CARGO_PKG_VERSION")));
}
