/// Returns the byte offset of the first occurrence of `needle` in `haystack`. An empty needle is
/// found at offset 0.
///
/// # Examples
/// ```
/// # use utility_lib::string::find;
/// assert_eq!(find("df", "asdf"), Some(2));
/// assert_eq!(find("q", "asdf"), None);
/// ```
pub fn find(needle: &str, haystack: &str) -> Option<usize> {
    haystack.find(needle)
}

/// Returns the first char matching `predicate`, along with its byte offset.
pub fn find_char<P: FnMut(char) -> bool>(mut predicate: P, input: &str) -> Option<(usize, char)> {
    input.char_indices().find(|&(_, ch)| predicate(ch))
}

/// Byte-wise prefix test. An empty needle always matches and a needle longer than the haystack
/// never does.
pub fn starts_with(needle: &str, haystack: &str) -> bool {
    match (needle.len(), haystack.len()) {
        (0, _) => true,
        (n, h) if n > h => false,
        (n, _) => haystack.as_bytes()[..n] == *needle.as_bytes(),
    }
}

/// Byte-wise suffix test, with the same edge cases as [`starts_with`].
pub fn ends_with(needle: &str, haystack: &str) -> bool {
    match (needle.len(), haystack.len()) {
        (0, _) => true,
        (n, h) if n > h => false,
        (n, h) => haystack.as_bytes()[h - n..] == *needle.as_bytes(),
    }
}

/// Returns what is left of `input` after removing `prefix`, or [`None`] if `input` doesn't start
/// with it.
///
/// # Examples
/// ```
/// # use utility_lib::string::strip_prefix;
/// assert_eq!(strip_prefix("Mr. ", "Mr. Smith").as_deref(), Some("Smith"));
/// assert_eq!(strip_prefix("Mrs. ", "Mr. Smith"), None);
/// ```
pub fn strip_prefix(prefix: &str, input: &str) -> Option<String> {
    starts_with(prefix, input).then(|| input[prefix.len()..].to_owned())
}

/// Returns what is left of `input` after removing `suffix`, or [`None`] if `input` doesn't end
/// with it.
pub fn strip_suffix(suffix: &str, input: &str) -> Option<String> {
    ends_with(suffix, input).then(|| input[..input.len() - suffix.len()].to_owned())
}
