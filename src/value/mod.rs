//! Extension traits that give [`Option`] and [`Result`] a small, explicit access vocabulary.
//!
//! Rather than introducing a bespoke optional type, this module leans on the standard sum types and
//! only adds the accessors and combinators that make call sites read well: [`OptionExt`] for
//! "a value or nothing" and [`ResultExt`] for "a success or an error".
//!
//! Ordering and equality are the standard ones. Two empty values are equal, an empty value is less
//! than any present one, and two present values compare by their contents.
//!
//! Forcing a value out of the wrong state is treated as a bug in the caller and panics with one of
//! the error types in this module. Every panicking accessor has a `try_` sibling that returns the
//! same error instead.

mod error;
mod option;
mod result;

pub use error::*;
pub use option::*;
pub use result::*;

#[cfg(test)]
mod tests;
