// Integration tests for the compression drivers (src/io/compress.rs).

use std::fs;

use lz4cli::container::{decode_container_bytes, ContainerHeader, ErrorKind, Lz4Block, HEADER_SIZE};
use lz4cli::io::compress::compress_filename;
use lz4cli::io::{compress_multiple_filenames, Prefs, NUL_MARK};
use tempfile::TempDir;

fn quiet() -> Prefs {
    Prefs {
        display_level: 0,
        ..Prefs::default()
    }
}

fn path_str(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

#[test]
fn output_is_a_valid_container() {
    let dir = TempDir::new().unwrap();
    let input: Vec<u8> = b"The quick brown fox jumps over the lazy dog. ".repeat(200);
    fs::write(dir.path().join("fox.txt"), &input).unwrap();

    let written =
        compress_filename(&path_str(&dir, "fox.txt"), &path_str(&dir, "fox.lz4"), &quiet())
            .unwrap();
    let bytes = fs::read(dir.path().join("fox.lz4")).unwrap();
    assert_eq!(written, bytes.len() as u64);

    let mut head = [0u8; HEADER_SIZE];
    head.copy_from_slice(&bytes[..HEADER_SIZE]);
    let header = ContainerHeader::from_bytes(&head);
    assert_eq!(header.original_size as usize, input.len());
    assert_eq!(header.compressed_size as usize, bytes.len() - HEADER_SIZE);
    assert_eq!(decode_container_bytes(&bytes, &Lz4Block).unwrap().data, input);
}

#[test]
fn empty_file_gives_bare_header() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty"), b"").unwrap();
    compress_filename(&path_str(&dir, "empty"), &path_str(&dir, "empty.lz4"), &quiet()).unwrap();
    assert_eq!(fs::read(dir.path().join("empty.lz4")).unwrap(), [0u8; HEADER_SIZE]);
}

#[test]
fn rm_deletes_source_after_success() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("gone.txt"), b"delete me afterwards").unwrap();
    let prefs = Prefs {
        remove_src_file: true,
        ..quiet()
    };
    compress_filename(&path_str(&dir, "gone.txt"), &path_str(&dir, "gone.txt.lz4"), &prefs)
        .unwrap();
    assert!(!dir.path().join("gone.txt").exists());
    assert!(dir.path().join("gone.txt.lz4").exists());
}

#[test]
fn rm_keeps_source_on_failure() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("src.txt"), b"stays").unwrap();
    fs::write(dir.path().join("src.txt.lz4"), b"occupied").unwrap();
    let prefs = Prefs {
        remove_src_file: true,
        ..quiet()
    };
    let err = compress_filename(&path_str(&dir, "src.txt"), &path_str(&dir, "src.txt.lz4"), &prefs)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(dir.path().join("src.txt").exists());
}

#[test]
fn missing_source_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = compress_filename(&path_str(&dir, "nope"), NUL_MARK, &quiet()).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn batch_appends_suffix_and_counts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a"), b"aaaa").unwrap();
    fs::write(dir.path().join("b"), b"bbbb").unwrap();
    let srcs = vec![path_str(&dir, "a"), path_str(&dir, "missing"), path_str(&dir, "b")];

    let summary = compress_multiple_filenames(&srcs, None, &quiet());
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.failed, 1);
    assert!(!summary.is_success());
    assert_eq!(summary.exit_code(), 2);
    assert!(dir.path().join("a.lz4").exists());
    assert!(dir.path().join("b.lz4").exists());
}

#[test]
fn batch_to_nul_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a"), b"aaaa").unwrap();
    let srcs = vec![path_str(&dir, "a")];

    let summary = compress_multiple_filenames(&srcs, Some(NUL_MARK), &quiet());
    assert!(summary.is_success());
    assert!(!dir.path().join("a.lz4").exists());
}
