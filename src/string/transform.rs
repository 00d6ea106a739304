/// ASCII lowercase. Bytes outside the ASCII range pass through unchanged.
pub fn to_lowercase(input: &str) -> String {
    input.to_ascii_lowercase()
}

/// ASCII uppercase. Bytes outside the ASCII range pass through unchanged.
pub fn to_uppercase(input: &str) -> String {
    input.to_ascii_uppercase()
}

/// Wraps `input` in double quotes. Nothing inside is escaped.
pub fn quote_string(input: &str) -> String {
    format!("\"{input}\"")
}

/// Replaces every occurrence of `from` with `to`, scanning left to right.
///
/// # Examples
/// ```
/// # use utility_lib::string::replace;
/// assert_eq!(replace("One Two Three", "Two", "2"), "One 2 Three");
/// assert_eq!(replace("One Two Three", "e", ""), "On Two Thr");
/// ```
pub fn replace(input: &str, from: &str, to: &str) -> String {
    replacen(input, from, to, usize::MAX)
}

/// Replaces at most `max_count` occurrences of `from` with `to`, copying the rest of `input`
/// verbatim. An empty `from` never matches.
///
/// At each position, a match of `from` is emitted as `to` and skipped over entirely; otherwise a
/// single char is copied. The first match found wins, so overlapping occurrences are not
/// considered.
///
/// # Examples
/// ```
/// # use utility_lib::string::replacen;
/// assert_eq!(replacen("One Two Three", "e", "-", 2), "On- Two Thr-e");
/// ```
pub fn replacen(input: &str, from: &str, to: &str, max_count: usize) -> String {
    let mut output = String::with_capacity(input.len());
    let mut remaining = if from.is_empty() { 0 } else { max_count };
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        if remaining > 0 && rest.starts_with(from) {
            output.push_str(to);
            rest = &rest[from.len()..];
            remaining -= 1;
        } else {
            output.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    output
}
