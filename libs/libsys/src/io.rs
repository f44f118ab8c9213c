//! Console I/O syscall wrappers

use crate::error::Error;
use crate::syscall::{nr, raw};
use crate::types::Fd;

/// Write bytes to a file descriptor.
///
/// # Returns
/// Number of bytes written.
#[inline]
pub fn write(file: Fd, buf: &[u8]) -> Result<usize, Error> {
    let ret = unsafe { raw::syscall3(nr::WRITE, file.raw(), buf.as_ptr() as u64, buf.len() as u64) } as i64;
    Error::from_syscall(ret).map(|n| n as usize)
}

/// Read bytes from a file descriptor.
///
/// # Returns
/// Number of bytes read, 0 at end of input.
#[inline]
pub fn read(file: Fd, buf: &mut [u8]) -> Result<usize, Error> {
    let ret = unsafe { raw::syscall3(nr::READ, file.raw(), buf.as_mut_ptr() as u64, buf.len() as u64) } as i64;
    Error::from_syscall(ret).map(|n| n as usize)
}
