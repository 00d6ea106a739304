//! Numeric parsing that reports only success or failure.
//!
//! The whole input has to be a number: surrounding whitespace, trailing garbage and out-of-range
//! values all produce [`None`]. The reason for a failure is deliberately not kept.

use std::str::FromStr;

/// Parses `input` as any [`FromStr`] type, discarding the error.
///
/// # Examples
/// ```
/// # use utility_lib::parse::parse;
/// assert_eq!(parse::<u8>("255"), Some(255));
/// assert_eq!(parse::<u8>("256"), None);
/// ```
pub fn parse<T: FromStr>(input: &str) -> Option<T> {
    input.parse().ok()
}

pub fn parse_i32(input: &str) -> Option<i32> {
    parse(input)
}

pub fn parse_i64(input: &str) -> Option<i64> {
    parse(input)
}

pub fn parse_u32(input: &str) -> Option<u32> {
    parse(input)
}

pub fn parse_u64(input: &str) -> Option<u64> {
    parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_i32("1234"), Some(1234));
        assert_eq!(parse_i32("-42"), Some(-42));
        assert_eq!(parse_i64("9000000000"), Some(9_000_000_000));
        assert_eq!(parse_u32("4294967295"), Some(u32::MAX));
        assert_eq!(parse_u64("0"), Some(0));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_i32("asdf"), None);
        assert_eq!(parse_i32("12abc"), None, "Parsing should never stop at a valid prefix.");
        assert_eq!(parse_i32(" 12"), None);
        assert_eq!(parse_i32(""), None);
        assert_eq!(parse_i32("2147483648"), None);
        assert_eq!(parse_u32("-1"), None);
        assert_eq!(parse::<f64>("1.5"), Some(1.5));
    }
}
