//! Adapters at the process boundary.

use std::env;
use std::ffi::CStr;

use libc::{c_char, c_int};

/// Collects a C-style `argc`/`argv` pair into owned strings. Invalid UTF-8 is replaced lossily.
///
/// A negative `argc` or a null `argv` produces an empty list.
///
/// # Safety
/// Unless `argv` is null, it must point to at least `argc` pointers, each of which must be non-null
/// and point to a nul-terminated string that stays valid for the duration of the call.
///
/// # Examples
/// ```
/// # use utility_lib::process::args_vec;
/// let argv = [c"prog".as_ptr(), c"--flag".as_ptr()];
/// // SAFETY: argv holds two valid C strings.
/// let args = unsafe { args_vec(2, argv.as_ptr()) };
/// assert_eq!(args, ["prog", "--flag"]);
/// ```
pub unsafe fn args_vec(argc: c_int, argv: *const *const c_char) -> Vec<String> {
    if argv.is_null() || argc <= 0 {
        return Vec::new();
    }
    (0..argc as usize)
        .map(|i| {
            // SAFETY: The caller guarantees argc valid, nul-terminated pointers behind argv.
            let arg = unsafe { CStr::from_ptr(*argv.add(i)) };
            arg.to_string_lossy().into_owned()
        })
        .collect()
}

/// Returns this process's arguments, program name included, replacing invalid UTF-8 lossily.
pub fn args() -> Vec<String> {
    env::args_os().map(|arg| arg.to_string_lossy().into_owned()).collect()
}
