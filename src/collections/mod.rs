//! Functional helpers over slices, plus [`Slice`], a bounds-checked window into a sequence.
//!
//! # Method
//! Every helper takes its input by shared reference and returns a new [`Vec`], so calls nest into
//! pipelines without any ownership juggling. The only exceptions are [`append`] and [`retain`],
//! which mutate their destination in place. The callable always comes first, matching the order of
//! a pipeline read from the inside out.

mod seq;
mod slice;

pub use seq::*;
pub use slice::*;
