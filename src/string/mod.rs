//! Free functions over string slices.
//!
//! Offsets are byte offsets. Argument order puts the "what" before the "where" (the needle before
//! the haystack, the prefix before the input), which keeps calls readable when they are nested.
//! Functions that build new text return an owned [`String`].

mod search;
mod slice;
mod split;
mod tokenize;
mod transform;

pub use search::*;
pub use slice::*;
pub use split::*;
pub use tokenize::*;
pub use transform::*;
