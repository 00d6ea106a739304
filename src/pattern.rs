//! A yes/no regular-expression search.

use regex::Regex;
use tracing::warn;

/// Returns whether `pattern` matches anywhere in `input`, or the compile error if `pattern` is not
/// a valid regular expression.
pub fn try_re_search(pattern: &str, input: &str) -> Result<bool, regex::Error> {
    Ok(Regex::new(pattern)?.is_match(input))
}

/// Returns whether `pattern` matches anywhere in `input`. An invalid pattern matches nothing.
///
/// # Examples
/// ```
/// # use utility_lib::pattern::re_search;
/// assert!(re_search("T[wh]", "Three"));
/// assert!(!re_search("T[wh]", "Four"));
/// ```
pub fn re_search(pattern: &str, input: &str) -> bool {
    try_re_search(pattern, input).unwrap_or_else(|error| {
        warn!(pattern, %error, "invalid regular expression");
        false
    })
}
