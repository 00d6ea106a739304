#![cfg(test)]

use std::panic;

use super::*;
use crate::{expect_eq, expect_true, require_eq, require_true};

const HERE: Location = Location::new("src/check/tests.rs", 7);

#[test]
fn test_failure_report_layout() {
    assert_eq!(
        failure_report("true", "false", None, HERE),
        "In file: src/check/tests.rs\nOn line: 7\nExpected true\nReceived `false`\n---"
    );
    assert_eq!(
        failure_report("`2`", "1", Some("Using tabs"), HERE),
        "In file: src/check/tests.rs\nOn line: 7\nExpected `2`\nReceived `1`\nUsing tabs\n---"
    );
    assert!(!failure_report("true", "false", Some(""), HERE).contains("\n\n"));
}

#[test]
fn test_expect_is_non_fatal() {
    assert!(expect_true!(true));
    assert!(!expect_true!(false));
    assert!(!expect_true!(1 > 2, "{} is not greater than {}", 1, 2));
    assert!(expect_eq!(vec![1, 2], [1, 2]));
    assert!(!expect_eq!("one", "two"));
    assert!(!expect_eq!(3, 4, "Using tabs"));
}

#[test]
fn test_require_passes_silently() {
    require_true!(true);
    require_true!(2 > 1, "message {}", "unused");
    require_eq!(String::from("a"), "a");
    require_eq!(vec![1], [1], "unused");
}

#[test]
fn test_require_payload() {
    let payload = panic::catch_unwind(|| require_true!(false, "This will fail.")).expect_err("should unwind");
    let failure = payload.downcast_ref::<AssertionFailed>().expect("payload should be AssertionFailed");
    assert_eq!(failure.message, "This will fail.");
    assert!(failure.location.file.ends_with("tests.rs"));
    assert!(failure.to_string().ends_with(": This will fail."));

    let payload = panic::catch_unwind(|| require_eq!(1, 2)).expect_err("should unwind");
    let failure = payload.downcast_ref::<AssertionFailed>().expect("payload should be AssertionFailed");
    assert_eq!(failure.message, "expected `2`, received `1`");

    let payload = panic::catch_unwind(|| panic!("ordinary")).expect_err("should unwind");
    assert!(payload.downcast_ref::<AssertionFailed>().is_none(), "Ordinary panics stay distinguishable.");
}
