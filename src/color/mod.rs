//! ANSI escape helpers for coloured terminal output.
//!
//! This is only a lookup table from a [`Style`] and a [`Color`] to an escape sequence. Nothing
//! checks whether the output is a terminal or whether it supports colour.
//!
//! # Examples
//! ```
//! # use utility_lib::color::{self, Color, Style};
//! assert_eq!(color::red("hi"), "\x1b[0;31mhi\x1b[0m");
//! assert_eq!(color::paint(Style::Bold, Color::Red, "hi"), color::red_bold("hi"));
//! ```

mod palette;

pub use palette::*;

#[cfg(test)]
mod tests;
