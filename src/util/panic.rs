use std::any::Any;
use std::error::Error;

/// An error type that represents a contract violation by the caller, rather than a recoverable
/// failure. Panicking through this trait keeps the panic message identical to the error's
/// [`Display`](std::fmt::Display) output.
pub trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

/// Extracts the message from a caught panic payload, for the two payload types that `panic!`
/// produces.
#[allow(unused)]
pub fn payload_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload.downcast_ref::<String>().map(String::as_str)
        .or_else(|| payload.downcast_ref::<&'static str>().copied())
}

#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, contains $text:expr) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = $crate::util::panic::payload_message(payload.as_ref());
                assert!(
                    message.is_some_and(|m| m.contains($text)),
                    "panic message {:?} should contain {:?}", message, $text
                );
            },
        }
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
