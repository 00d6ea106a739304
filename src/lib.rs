//! A grab bag of small helpers that I kept rewriting in every project, pulled into one crate.
//!
//! # Purpose
//! Nothing in here is clever. Each function is a short, single-purpose transformation over strings
//! or slices, written so that call sites read as a pipeline of plain function calls:
//!
//! ```
//! # use utility_lib::collections::{filter, fmap, take_while};
//! let values = [1_u32, 2, 3, 4, 5, 6];
//! let result = take_while(|i| *i < 10, &fmap(|i| i * 3, &filter(|i| *i >= 2, &values)));
//! assert_eq!(result, [6, 9]);
//! ```
//!
//! # Error Handling
//! The crate distinguishes three kinds of failure and keeps them apart:
//! - Absence: the common "not found" case is an [`Option::None`]. Nothing panics for it.
//! - Bad access: forcing a value out of an empty [`Option`] or the wrong side of a [`Result`] is a
//!   bug in the caller, so it panics immediately with a typed message (see [`value`]).
//! - Parse failure: the [`parse`] helpers return [`None`] for any malformed input and never
//!   partially parse.
//!
//! Where a [`Result`] is returned, the error is a small strongly typed struct or enum that
//! implements [`Error`](std::error::Error), rather than a boxed trait object.
//!
//! # Features
//! - `fs`: the whole-file reader in [`fs`], built on `libc` syscalls.
//! - `process`: argument vectorization in [`process`].
//! - `regex`: the pattern predicate in [`pattern`].
//!
//! All three are enabled by default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod check;
pub mod collections;
pub mod color;
pub mod format;
pub mod parse;
pub mod string;
pub mod value;

#[cfg(all(feature = "fs", unix))]
pub mod fs;
#[cfg(feature = "regex")]
pub mod pattern;
#[cfg(feature = "process")]
pub mod process;

pub(crate) mod util;
