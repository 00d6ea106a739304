//! Lightweight checks for test code and ad-hoc scripts.
//!
//! The `expect` family ([`expect_true!`](crate::expect_true), [`expect_eq!`](crate::expect_eq))
//! reports a failure on stderr and carries on, so a single run can surface every broken check. The
//! `require` family ([`require_true!`](crate::require_true), [`require_eq!`](crate::require_eq))
//! unwinds with an [`AssertionFailed`] payload instead, which ends the current test without being
//! mistaken for an ordinary panic.

mod report;

pub use report::*;

#[cfg(test)]
mod tests;

/// Checks that a condition holds, printing a diagnostic to stderr if it doesn't. Evaluates to
/// whether the check passed.
///
/// # Examples
/// ```
/// # use utility_lib::expect_true;
/// assert!(expect_true!(1 + 1 == 2));
/// assert!(!expect_true!(1 + 1 == 3, "arithmetic is {}", "broken"));
/// ```
#[macro_export]
macro_rules! expect_true {
    ($cond:expr $(,)?) => {
        $crate::check::expect_true($cond, None, $crate::check::Location::new(file!(), line!()))
    };
    ($cond:expr, $($msg:tt)+) => {
        $crate::check::expect_true(
            $cond,
            Some(::std::format!($($msg)+).as_str()),
            $crate::check::Location::new(file!(), line!()),
        )
    };
}

/// Checks that two values are equal, printing both to stderr if they aren't. Evaluates to whether
/// the check passed.
#[macro_export]
macro_rules! expect_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::check::expect_equal(
            &$actual,
            &$expected,
            None,
            $crate::check::Location::new(file!(), line!()),
        )
    };
    ($actual:expr, $expected:expr, $($msg:tt)+) => {
        $crate::check::expect_equal(
            &$actual,
            &$expected,
            Some(::std::format!($($msg)+).as_str()),
            $crate::check::Location::new(file!(), line!()),
        )
    };
}

/// Checks that a condition holds, unwinding with an
/// [`AssertionFailed`](crate::check::AssertionFailed) payload if it doesn't.
#[macro_export]
macro_rules! require_true {
    ($cond:expr $(,)?) => {
        $crate::check::require_true($cond, None, $crate::check::Location::new(file!(), line!()))
    };
    ($cond:expr, $($msg:tt)+) => {
        $crate::check::require_true(
            $cond,
            Some(::std::format!($($msg)+).as_str()),
            $crate::check::Location::new(file!(), line!()),
        )
    };
}

/// Checks that two values are equal, unwinding with an
/// [`AssertionFailed`](crate::check::AssertionFailed) payload if they aren't.
#[macro_export]
macro_rules! require_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::check::require_equal(
            &$actual,
            &$expected,
            None,
            $crate::check::Location::new(file!(), line!()),
        )
    };
    ($actual:expr, $expected:expr, $($msg:tt)+) => {
        $crate::check::require_equal(
            &$actual,
            &$expected,
            Some(::std::format!($($msg)+).as_str()),
            $crate::check::Location::new(file!(), line!()),
        )
    };
}
