//! Whole-file reading through thin `libc` syscall wrappers.
//!
//! Files are opened read-only, read to the end in fixed-size chunks and closed. There is no
//! streaming and no retry: an interrupted read is reported as [`InterruptError`] like any other
//! failure. Errors are strongly typed, with each relevant errno mapped to its own struct and
//! collected in [`ReadError`].

mod error;
mod fd;
mod read;

pub use error::*;
pub use read::*;

#[cfg(test)]
mod tests;
