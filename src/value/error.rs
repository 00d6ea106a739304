use derive_more::{Display, Error};

use crate::util::panic::Panic;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("called `value()` on an empty Option")]
pub struct MissingValueError;
impl Panic for MissingValueError {}

/// The error produced by [`OptionExt::expect_value`](super::OptionExt::expect_value), carrying
/// the caller's diagnostic message.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("{_0}")]
pub struct ExpectedValueError(#[error(not(source))] pub String);
impl Panic for ExpectedValueError {}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("called `value()` on a Result holding an error")]
pub struct BadOkAccessError;
impl Panic for BadOkAccessError {}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("called `err_value()` on a Result holding a value")]
pub struct BadErrAccessError;
impl Panic for BadErrAccessError {}
