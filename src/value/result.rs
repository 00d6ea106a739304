use super::{BadErrAccessError, BadOkAccessError};
use crate::util::panic::Panic;

/// Accessors and combinators for [`Result`]. A Result always holds exactly one side, so each
/// accessor either succeeds or reports that the other side was present.
pub trait ResultExt<T, E>: Sized {
    /// Returns true if the Result holds a success value.
    fn has_value(&self) -> bool;

    /// Returns the success value.
    ///
    /// # Panics
    /// Panics with [`BadOkAccessError`] if the Result holds an error.
    fn value(self) -> T;

    /// Returns the error value.
    ///
    /// # Panics
    /// Panics with [`BadErrAccessError`] if the Result holds a success value.
    fn err_value(self) -> E;

    fn try_value(self) -> Result<T, BadOkAccessError>;

    fn try_err_value(self) -> Result<E, BadErrAccessError>;

    /// Returns the success value or `default`, discarding any error.
    fn value_or(self, default: T) -> T;

    /// Maps the success side, passing an error through untouched.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::value::ResultExt;
    /// let res: Result<&str, i32> = Ok("Hello");
    /// assert_eq!(res.transform(str::len), Ok(5));
    /// ```
    fn transform<U, F: FnOnce(T) -> U>(self, func: F) -> Result<U, E>;

    /// Maps the error side, passing a success value through untouched.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::value::ResultExt;
    /// let res: Result<String, i32> = Err(62);
    /// assert_eq!(res.err_transform(|e| e % 2 == 0).err_value(), true);
    /// ```
    fn err_transform<U, F: FnOnce(E) -> U>(self, func: F) -> Result<T, U>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn has_value(&self) -> bool {
        self.is_ok()
    }

    fn value(self) -> T {
        match self {
            Ok(val) => val,
            Err(_) => BadOkAccessError.panic(),
        }
    }

    fn err_value(self) -> E {
        match self {
            Ok(_) => BadErrAccessError.panic(),
            Err(err) => err,
        }
    }

    fn try_value(self) -> Result<T, BadOkAccessError> {
        self.map_err(|_| BadOkAccessError)
    }

    fn try_err_value(self) -> Result<E, BadErrAccessError> {
        match self {
            Ok(_) => Err(BadErrAccessError),
            Err(err) => Ok(err),
        }
    }

    fn value_or(self, default: T) -> T {
        self.unwrap_or(default)
    }

    fn transform<U, F: FnOnce(T) -> U>(self, func: F) -> Result<U, E> {
        match self {
            Ok(val) => Ok(func(val)),
            Err(err) => Err(err),
        }
    }

    fn err_transform<U, F: FnOnce(E) -> U>(self, func: F) -> Result<T, U> {
        match self {
            Ok(val) => Ok(val),
            Err(err) => Err(func(err)),
        }
    }
}
