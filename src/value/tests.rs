#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

fn double_it_with_threshold(input: i32) -> Option<i32> {
    (input >= 4).then_some(input * 2)
}

fn larger_than_5(input: i32) -> Option<i32> {
    (input > 5).then_some(input)
}

#[test]
fn test_option_comparisons() {
    let four = Some(4);
    let five = Some(5);
    let empty: Option<i32> = None;

    assert_eq!(four, Some(4));
    assert_ne!(four, five);
    assert_ne!(empty, five);
    assert_eq!(empty, None, "Two empty Options should be equal.");

    assert!(four < five);
    assert!(empty < four, "An empty Option should be less than any held value.");
    assert!(!(four < empty));
    assert!(!(empty < None));
    assert!(empty <= None);
    assert!(four >= empty);
    assert!(five > four);
}

#[test]
fn test_option_accessors() {
    let mut opt = Some(4);
    assert!(opt.has_value());
    assert_eq!(opt.value(), 4);
    assert_eq!(opt.reset(), Some(4));
    assert!(!opt.has_value());
    assert_eq!(opt, None);

    assert_eq!(opt.value_or(8), 8);
    assert_eq!(Some(3).value_or(8), 3);
    assert_eq!(opt.try_value(), Err(MissingValueError));
    assert_eq!(Some(7).expect_value("There should be a value here."), 7);
}

#[test]
fn test_option_combinators() {
    let opt = Some(4);
    assert_eq!(opt.transform(|i| i * 2).value(), 8);
    assert_eq!(opt.transform(|i| i > 5).value(), false);
    assert_eq!(None::<i32>.transform(|_| -> i32 { panic!("should not be called") }), None);

    assert_eq!(opt.and_then(double_it_with_threshold), Some(8));
    assert_eq!(opt.and_then(larger_than_5), None);
    assert_eq!(None.and_then(double_it_with_threshold), None);

    assert_eq!(opt.or_else(|| Some(7)), Some(4), "or_else should keep a held value.");
    assert_eq!(None.or_else(|| Some(8)), Some(8));
}

#[test]
fn test_option_bad_access() {
    assert_panics!({
        None::<i32>.value();
    }, contains "empty Option");

    assert_panics!({
        None::<i32>.expect_value("This will panic.");
    }, contains "This will panic.");
}

#[test]
fn test_result_combinators() {
    let res: Result<String, i32> = Ok(String::from("Hello"));
    let len = res.transform(|s| s.len());
    assert_eq!(len, Ok(5));
    assert_eq!(len.err_transform(|e| e * 2), Ok(5), "err_transform should pass values through.");

    let res: Result<String, i32> = Err(62);
    let parity = res.clone().err_transform(|e| e % 2 == 0);
    assert!(parity.clone().err_value());
    assert!(!parity.has_value());
    assert_eq!(res.transform(|s| s.len()), Err(62), "transform should pass errors through.");
}

#[test]
fn test_result_accessors() {
    let ok: Result<i32, i32> = Ok(42);
    let err: Result<i32, i32> = Err(62);

    assert!(ok.has_value());
    assert_eq!(ok.value(), 42);
    assert_eq!(err.value_or(0), 0);
    assert_eq!(err.err_value(), 62);
    assert_eq!(ok.try_err_value(), Err(BadErrAccessError));
    assert_eq!(err.try_value(), Err(BadOkAccessError));

    assert_panics!({
        err.value();
    }, contains "holding an error");

    assert_panics!({
        ok.err_value();
    }, contains "holding a value");
}
