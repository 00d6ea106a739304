//! Positional formatting with runtime templates, and [`Display`](std::fmt::Display) adapters for
//! the standard containers.
//!
//! [`format`] is for templates that are only known at runtime. Everything known at compile time
//! should keep using [`format!`](std::format).

mod display;
mod template;

pub use display::*;
pub use template::*;

#[cfg(test)]
mod tests;
