use std::collections::{BTreeSet, HashSet};
use std::fmt::{self, Display, Formatter};

/// Displays an [`Option`] as `Some(value)` or `None`.
pub struct DisplayOption<'a, T> {
    pub(crate) inner: &'a Option<T>,
}

/// Displays a [`Result`] as `Ok(value)` or `Err(error)`.
pub struct DisplayResult<'a, T, E> {
    pub(crate) inner: &'a Result<T, E>,
}

/// Displays a sequence as `Vec { a, b, c }`.
pub struct DisplaySeq<'a, T> {
    pub(crate) inner: &'a [T],
}

/// Displays a set as `Set { a, b, c }`, in the set's iteration order.
pub struct DisplaySet<'a, C: ?Sized> {
    pub(crate) inner: &'a C,
}

impl<T: Display> Display for DisplayOption<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.inner {
            Some(value) => write!(f, "Some({value})"),
            None => write!(f, "None"),
        }
    }
}

impl<T: Display, E: Display> Display for DisplayResult<'_, T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.inner {
            Ok(value) => write!(f, "Ok({value})"),
            Err(error) => write!(f, "Err({error})"),
        }
    }
}

impl<T: Display> Display for DisplaySeq<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, "Vec", self.inner.iter())
    }
}

impl<'a, C: ?Sized, T: Display + 'a> Display for DisplaySet<'a, C>
where
    &'a C: IntoIterator<Item = &'a T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, "Set", self.inner.into_iter())
    }
}

// Empty collections print with two spaces between the braces, e.g. `Vec {  }`.
fn write_joined<'a, T: Display + 'a>(
    f: &mut Formatter<'_>,
    name: &str,
    items: impl Iterator<Item = &'a T>,
) -> fmt::Result {
    write!(f, "{name} {{ ")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, " }}")
}

/// Provides a [`Display`] adapter for types whose standard output is only available through
/// [`Debug`](std::fmt::Debug).
///
/// # Examples
/// ```
/// # use utility_lib::format::Show;
/// assert_eq!(Some(4).show().to_string(), "Some(4)");
/// assert_eq!(vec![1, 2, 3].show().to_string(), "Vec { 1, 2, 3 }");
/// ```
pub trait Show {
    type Shown<'a>: Display where Self: 'a;

    fn show(&self) -> Self::Shown<'_>;
}

impl<T: Display> Show for Option<T> {
    type Shown<'a> = DisplayOption<'a, T> where Self: 'a;

    fn show(&self) -> Self::Shown<'_> {
        DisplayOption { inner: self }
    }
}

impl<T: Display, E: Display> Show for Result<T, E> {
    type Shown<'a> = DisplayResult<'a, T, E> where Self: 'a;

    fn show(&self) -> Self::Shown<'_> {
        DisplayResult { inner: self }
    }
}

impl<T: Display> Show for [T] {
    type Shown<'a> = DisplaySeq<'a, T> where Self: 'a;

    fn show(&self) -> Self::Shown<'_> {
        DisplaySeq { inner: self }
    }
}

impl<T: Display> Show for Vec<T> {
    type Shown<'a> = DisplaySeq<'a, T> where Self: 'a;

    fn show(&self) -> Self::Shown<'_> {
        DisplaySeq { inner: self }
    }
}

impl<T: Display> Show for BTreeSet<T> {
    type Shown<'a> = DisplaySet<'a, BTreeSet<T>> where Self: 'a;

    fn show(&self) -> Self::Shown<'_> {
        DisplaySet { inner: self }
    }
}

impl<T: Display, S> Show for HashSet<T, S> {
    type Shown<'a> = DisplaySet<'a, HashSet<T, S>> where Self: 'a;

    fn show(&self) -> Self::Shown<'_> {
        DisplaySet { inner: self }
    }
}
