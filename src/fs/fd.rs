use std::ffi::CStr;
use std::io;

use libc::{O_CLOEXEC, O_RDONLY, c_int};

use super::ReadError;

pub(crate) fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or_default()
}

/// An owned, read-only file descriptor, closed on drop.
#[derive(Debug)]
pub(crate) struct Fd(c_int);

impl Fd {
    pub fn open(pathname: &CStr) -> Result<Fd, ReadError> {
        // SAFETY: pathname is a valid nul-terminated string that outlives the call.
        match unsafe { libc::open(pathname.as_ptr(), O_RDONLY | O_CLOEXEC) } {
            -1 => Err(ReadError::interpret_raw_error(err_no())),
            fd => Ok(Fd(fd)),
        }
    }

    pub fn read(&self, buf: &mut [u8]) -> Result<usize, ReadError> {
        // SAFETY: buf is valid for writes of buf.len() bytes for the duration of the call.
        match unsafe { libc::read(self.0, buf.as_mut_ptr().cast(), buf.len()) } {
            -1 => Err(ReadError::interpret_raw_error(err_no())),
            count => Ok(count as usize),
        }
    }

    /// Reads until end of file.
    pub fn read_to_end(&self) -> Result<Vec<u8>, ReadError> {
        let mut bytes = Vec::new();
        let mut chunk = [0_u8; 8192];
        loop {
            match self.read(&mut chunk)? {
                0 => return Ok(bytes),
                count => bytes.extend_from_slice(&chunk[..count]),
            }
        }
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // Nothing has been written through a read-only descriptor, so a failed close loses no data.
        // SAFETY: Fd owns its descriptor, which is not used again after drop.
        unsafe { libc::close(self.0) };
    }
}
