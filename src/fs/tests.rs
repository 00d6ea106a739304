#![cfg(test)]

use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use super::*;

fn temp_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(contents).expect("temp file should be writable");
    file
}

#[test]
fn test_read_to_string() {
    let file = temp_file(b"One\nTwo\nThree\nFour");
    assert_eq!(read_to_string(file.path()).expect("file is readable"), "One\nTwo\nThree\nFour");

    let empty = temp_file(b"");
    assert_eq!(read_to_string(empty.path()).expect("file is readable"), "");
}

#[test]
fn test_read_larger_than_chunk() {
    let contents = "line\n".repeat(5000);
    let file = temp_file(contents.as_bytes());
    assert_eq!(read_to_string(file.path()).expect("file is readable"), contents);
    assert_eq!(lines_from_file(file.path()).len(), 5000);
}

#[test]
fn test_lines_from_file() {
    let file = temp_file(b"One\nTwo\n\nThree\n");
    assert_eq!(lines_from_file(file.path()), ["One", "Two", "", "Three"]);
    assert_eq!(try_lines_from_file(file.path()).expect("file is readable").len(), 4);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let missing = dir.path().join("missing.txt");

    assert!(lines_from_file(&missing).is_empty(), "A missing file reads as no lines.");
    let error = try_lines_from_file(&missing).expect_err("file does not exist");
    assert!(error.is_missing_component(), "{error}");

    let empty = temp_file(b"");
    assert_eq!(try_lines_from_file(empty.path()).ok(), Some(Vec::new()));
}

#[test]
fn test_read_errors() {
    let dir = TempDir::new().expect("temp dir should be created");
    assert!(matches!(read_to_string(dir.path()), Err(ReadError::IsDirectory(_))));

    let nested = dir.path().join("a\0b");
    assert!(matches!(read_to_string(nested), Err(ReadError::InvalidPath(_))));

    let file = temp_file(&[0xff, 0xfe, 0x00]);
    assert!(matches!(read_to_string(file.path()), Err(ReadError::InvalidUtf8(_))));
    assert!(lines_from_file(file.path()).is_empty());

    let file = temp_file(b"x");
    let through_file = file.path().join("child");
    assert!(matches!(read_to_string(through_file), Err(ReadError::NonDirComponent(_))));
}
