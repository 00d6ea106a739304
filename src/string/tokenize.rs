#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Word,
    Quoted,
}

/// The whitespace set of the C locale, which includes vertical tab unlike
/// [`char::is_ascii_whitespace`].
const fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Breaks `input` into shell-like words.
///
/// Runs of whitespace separate words and are discarded. A double quote starts a quoted token in
/// which whitespace is kept, and the next unescaped double quote ends it. A backslash escapes the
/// special meaning of the char after it, for that one char only; both the backslash and the escaped
/// quote are kept in the token. Empty quoted strings produce no token.
///
/// # Examples
/// ```
/// # use utility_lib::string::string_break;
/// assert_eq!(
///     string_break(r#"--option --flag -t -s "one two""#),
///     ["--option", "--flag", "-t", "-s", "one two"],
/// );
/// assert_eq!(string_break(r#"o\"ne "two three""#), [r#"o\"ne"#, "two three"]);
/// ```
pub fn string_break(input: &str) -> Vec<String> {
    let mut output = Vec::new();
    let mut token = String::new();
    let mut mode = Mode::Word;
    let mut escaped = false;

    for ch in input.chars() {
        match (ch, mode, escaped) {
            ('\\', _, _) => {
                token.push(ch);
                escaped = true;
                continue;
            },
            ('"', _, true) => token.push(ch),
            ('"', Mode::Word, false) => {
                flush(&mut token, &mut output);
                mode = Mode::Quoted;
            },
            ('"', Mode::Quoted, false) => {
                flush(&mut token, &mut output);
                mode = Mode::Word;
            },
            (_, Mode::Quoted, _) => token.push(ch),
            (_, Mode::Word, _) if is_separator(ch) => flush(&mut token, &mut output),
            (_, Mode::Word, _) => token.push(ch),
        }
        escaped = false;
    }

    flush(&mut token, &mut output);
    output
}

fn flush(token: &mut String, output: &mut Vec<String>) {
    if !token.is_empty() {
        output.push(std::mem::take(token));
    }
}
