use crate::util::error::{BadRange, NotCharBoundary, RangeOutOfBounds};
use crate::util::panic::Panic;

/// Returns an owned copy of `input[start..end]`.
///
/// # Panics
/// Panics if `start > end`, `end` is past the end of `input`, or either index splits a char. Keeping
/// the range valid is the caller's responsibility.
///
/// # Examples
/// ```
/// # use utility_lib::string::slice;
/// assert_eq!(slice(0, 3, "One Two Three"), "One");
/// ```
pub fn slice(start: usize, end: usize, input: &str) -> String {
    match check_range(start, end, input) {
        Ok(()) => input[start..end].to_owned(),
        Err(err) => err.panic(),
    }
}

/// Returns an owned copy of `input[start..]`.
///
/// # Panics
/// Panics under the same conditions as [`slice`].
pub fn slice_from(start: usize, input: &str) -> String {
    slice(start, input.len(), input)
}

fn check_range(start: usize, end: usize, input: &str) -> Result<(), BadRange> {
    if start > end || end > input.len() {
        Err(RangeOutOfBounds { start, end, len: input.len() })?
    }
    for index in [start, end] {
        if !input.is_char_boundary(index) {
            Err(NotCharBoundary { index })?
        }
    }
    Ok(())
}
