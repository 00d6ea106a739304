use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;
use std::ptr;
use std::slice::Iter;

/// A read-only window `[start, end)` over a borrowed sequence.
///
/// Unlike `&[T]`, a Slice remembers which sequence it came from. Two Slices are equal when they have
/// the same bounds over the same underlying sequence, regardless of whether their contents match.
///
/// Slice implements [`Deref<Target = [T]>`](Deref), which provides the rest of the read-only slice
/// API over the window.
///
/// # Examples
/// ```
/// # use utility_lib::collections::slice;
/// let words = ["one", "two", "three", "four", "five"];
/// let window = slice(2, 5, &words).unwrap();
/// assert_eq!(window.to_vec(), ["three", "four", "five"]);
/// assert_eq!(window, slice(2, 5, &words).unwrap());
/// ```
pub struct Slice<'a, T> {
    start: usize,
    end: usize,
    data: &'a [T],
}

/// Creates a [`Slice`] over `input[start..end]`, or [`None`] if the bounds are reversed, `end` is past
/// the end of `input`, or `start` isn't the index of an element.
pub const fn slice<T>(start: usize, end: usize, input: &[T]) -> Option<Slice<'_, T>> {
    if end < start || end > input.len() || start >= input.len() {
        return None;
    }
    Some(Slice {
        start,
        end,
        data: input,
    })
}

/// Creates a [`Slice`] from `start` to the end of `input`, with the same bounds rules as [`slice`].
pub const fn slice_from<T>(start: usize, input: &[T]) -> Option<Slice<'_, T>> {
    slice(start, input.len(), input)
}

impl<'a, T> Slice<'a, T> {
    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of elements in the window.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the windowed elements as a plain slice, keeping the original lifetime.
    pub fn as_slice(&self) -> &'a [T] {
        &self.data[self.start..self.end]
    }

    pub fn iter(&self) -> Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Clones the windowed elements into a new [`Vec`].
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<T> Deref for Slice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<'a, T> IntoIterator for &Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> PartialEq for Slice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && ptr::eq(self.data, other.data)
    }
}

impl<T> Eq for Slice<'_, T> {}

impl<T> Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("data", &self.data.as_ptr())
            .finish()
    }
}

impl<T> Display for Slice<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Slice {{ start: {}, end: {}, data: {:p} }}", self.start, self.end, self.data.as_ptr())
    }
}
