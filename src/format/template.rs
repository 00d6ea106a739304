use std::fmt::Display;

use crate::string;

const PLACEHOLDER: &str = "{}";

/// Substitutes each argument into `template`, one at a time.
///
/// Each argument replaces the leftmost `{}` in the text produced so far. Extra arguments are
/// ignored and extra placeholders are left as they are. Since substitution happens one argument at
/// a time, a `{}` introduced by an earlier argument is filled by the next one.
///
/// # Examples
/// ```
/// # use utility_lib::format::format;
/// assert_eq!(format("hello {} and {}!", &[&"Alice", &"Bob"]), "hello Alice and Bob!");
/// assert_eq!(format("hello {}", &[&42]), "hello 42");
/// assert_eq!(format("{} {}", &[&1]), "1 {}");
/// ```
pub fn format(template: &str, args: &[&dyn Display]) -> String {
    args.iter().fold(template.to_owned(), |processed, arg| substitute(&processed, *arg))
}

fn substitute(template: &str, arg: &dyn Display) -> String {
    match string::find(PLACEHOLDER, template) {
        Some(index) => {
            let rest = &template[index + PLACEHOLDER.len()..];
            std::format!("{}{arg}{rest}", &template[..index])
        },
        None => template.to_owned(),
    }
}

/// Variadic front end for [`format`].
///
/// # Examples
/// ```
/// # use utility_lib::format_with;
/// assert_eq!(format_with!("{} + {} = {}", 1, 2, 1 + 2), "1 + 2 = 3");
/// ```
#[macro_export]
macro_rules! format_with {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format::format($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Prints ``debug: `value` `` to stdout and hands the value back, so it can be dropped into the
/// middle of an expression.
pub fn debug<T: Display>(value: T) -> T {
    println!("debug: `{value}`");
    value
}
