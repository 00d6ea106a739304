use super::{ExpectedValueError, MissingValueError};
use crate::util::panic::Panic;

/// Accessors and combinators for [`Option`].
///
/// `and_then` and `or_else` are not redeclared here: the inherent [`Option::and_then`] and
/// [`Option::or_else`] already flatten one level and call the fallback only when empty.
pub trait OptionExt<T>: Sized {
    /// Returns true if the Option holds a value.
    fn has_value(&self) -> bool;

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics with [`MissingValueError`] if the Option is empty.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::value::OptionExt;
    /// assert_eq!(Some(4).value(), 4);
    /// ```
    fn value(self) -> T;

    /// Returns the contained value, or [`MissingValueError`] if the Option is empty.
    fn try_value(self) -> Result<T, MissingValueError>;

    /// Returns the contained value or the provided default. Never panics.
    fn value_or(self, default: T) -> T;

    /// Maps a held value with `func`, leaving an empty Option empty without calling `func`.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::value::OptionExt;
    /// assert_eq!(Some(4).transform(|i| i * 2), Some(8));
    /// assert_eq!(None::<i32>.transform(|i| i * 2), None);
    /// ```
    fn transform<U, F: FnOnce(T) -> U>(self, func: F) -> Option<U>;

    /// Like [`value`](OptionExt::value), but the panic carries `message` instead.
    ///
    /// # Panics
    /// Panics with [`ExpectedValueError`] if the Option is empty.
    fn expect_value(self, message: &str) -> T;

    /// Empties the Option in place, returning whatever it held.
    fn reset(&mut self) -> Option<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn has_value(&self) -> bool {
        self.is_some()
    }

    fn value(self) -> T {
        match self {
            Some(val) => val,
            None => MissingValueError.panic(),
        }
    }

    fn try_value(self) -> Result<T, MissingValueError> {
        self.ok_or(MissingValueError)
    }

    fn value_or(self, default: T) -> T {
        self.unwrap_or(default)
    }

    fn transform<U, F: FnOnce(T) -> U>(self, func: F) -> Option<U> {
        match self {
            Some(val) => Some(func(val)),
            None => None,
        }
    }

    fn expect_value(self, message: &str) -> T {
        match self {
            Some(val) => val,
            None => ExpectedValueError(message.to_owned()).panic(),
        }
    }

    fn reset(&mut self) -> Option<T> {
        self.take()
    }
}
