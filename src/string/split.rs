/// Splits `input` on `delim`, dropping the empty fields that leading, trailing or repeated
/// delimiters would otherwise produce.
///
/// # Examples
/// ```
/// # use utility_lib::string::split;
/// assert_eq!(split(",one,,two,", ','), ["one", "two"]);
/// ```
pub fn split(input: &str, delim: char) -> Vec<String> {
    input.split(delim)
        .filter(|field| !field.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Splits `input` on line feeds.
///
/// Empty lines in the middle of the input are kept, but a newline at the very end does not produce
/// an extra empty line. Carriage returns are not treated specially.
///
/// # Examples
/// ```
/// # use utility_lib::string::lines;
/// assert_eq!(lines("One\n\nTwo\n"), ["One", "", "Two"]);
/// assert_eq!(lines("One\nTwo"), ["One", "Two"]);
/// ```
pub fn lines(input: &str) -> Vec<String> {
    let mut output: Vec<String> = input.split('\n').map(str::to_owned).collect();
    if output.last().is_some_and(String::is_empty) {
        output.pop();
    }
    output
}
