use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use tracing::{debug, warn};

use super::fd::Fd;
use super::{InvalidPathError, InvalidUtf8Error, ReadError};
use crate::string;

/// Reads the whole file at `path` into a [`String`].
pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, ReadError> {
    let path = path.as_ref();
    let pathname = CString::new(path.as_os_str().as_bytes()).map_err(|_| InvalidPathError)?;

    let bytes = Fd::open(&pathname)?.read_to_end()?;
    debug!(path = %path.display(), bytes = bytes.len(), "read file");

    Ok(String::from_utf8(bytes).map_err(|_| InvalidUtf8Error)?)
}

/// Reads the file at `path` and splits it with [`string::lines`], keeping the reason for any
/// failure.
pub fn try_lines_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ReadError> {
    Ok(string::lines(&read_to_string(path)?))
}

/// Reads the file at `path` and splits it with [`string::lines`].
///
/// An unreadable file produces no lines, the same as an empty one. Use [`try_lines_from_file`] to
/// tell the two apart.
pub fn lines_from_file<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    try_lines_from_file(path).unwrap_or_else(|error| {
        warn!(path = %path.display(), %error, "unable to read file, treating it as empty");
        Vec::new()
    })
}
