use std::fmt::{Debug, Write};
use std::panic;

use derive_more::{Display, Error};

/// Where a check was written, as captured by [`file!`] and [`line!`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{file}:{line}")]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Location {
        Location {
            file,
            line,
        }
    }
}

/// The panic payload of a failed `require` check. Recover it with
/// [`downcast_ref`](std::any::Any::downcast_ref) on the payload returned by
/// [`catch_unwind`](std::panic::catch_unwind).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{location}: {message}")]
pub struct AssertionFailed {
    pub message: String,
    pub location: Location,
}

/// Builds the diagnostic printed for a failed check. The layout is one fact per line, closed by a
/// `---` separator.
pub fn failure_report(expected: &str, received: &str, message: Option<&str>, location: Location) -> String {
    let mut report = String::new();
    // Writing into a String can't fail.
    let _ = writeln!(report, "In file: {}\nOn line: {}", location.file, location.line);
    let _ = writeln!(report, "Expected {expected}\nReceived `{received}`");
    if let Some(message) = message.filter(|m| !m.is_empty()) {
        let _ = writeln!(report, "{message}");
    }
    report.push_str("---");
    report
}

pub fn expect_true(value: bool, message: Option<&str>, location: Location) -> bool {
    if !value {
        eprintln!("{}", failure_report("true", "false", message, location));
    }
    value
}

pub fn expect_equal<T, U>(actual: &T, expected: &U, message: Option<&str>, location: Location) -> bool
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    let passed = actual == expected;
    if !passed {
        let expected = format!("`{expected:?}`");
        eprintln!("{}", failure_report(&expected, &format!("{actual:?}"), message, location));
    }
    passed
}

/// # Panics
/// Unwinds with an [`AssertionFailed`] payload if `value` is false.
pub fn require_true(value: bool, message: Option<&str>, location: Location) {
    if !value {
        fail(message.unwrap_or("expected true, received false"), location);
    }
}

/// # Panics
/// Unwinds with an [`AssertionFailed`] payload if the values differ.
pub fn require_equal<T, U>(actual: &T, expected: &U, message: Option<&str>, location: Location)
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    if actual != expected {
        let detail = format!("expected `{expected:?}`, received `{actual:?}`");
        fail(message.unwrap_or(&detail), location);
    }
}

fn fail(message: &str, location: Location) -> ! {
    panic::panic_any(AssertionFailed {
        message: message.to_owned(),
        location,
    })
}
