//! Unified error type for libsys operations.

use crate::errno::Errno;

/// Unified error type for libsys operations.
///
/// All fallible wrappers return `Result<T, Error>`, so `?` works across
/// modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A POSIX errno from a failed syscall.
    Os(Errno),
}

impl Error {
    /// Convert a raw syscall return value to `Result`.
    ///
    /// Syscalls return negative values on failure. The kernel's generic
    /// failure value `-1` decodes as `EPERM`.
    #[inline]
    pub fn from_syscall(ret: i64) -> Result<u64, Error> {
        if ret < 0 {
            Err(Error::Os(Errno::from_raw(-ret)))
        } else {
            Ok(ret as u64)
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Os(e) => write!(f, "{:?}", e),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_returns_are_values() {
        assert_eq!(Error::from_syscall(0), Ok(0));
        assert_eq!(Error::from_syscall(7), Ok(7));
    }

    #[test]
    fn generic_failure_is_eperm() {
        assert_eq!(Error::from_syscall(-1), Err(Error::Os(Errno::EPERM)));
    }

    #[test]
    fn negated_errno_is_decoded() {
        assert_eq!(Error::from_syscall(-10), Err(Error::Os(Errno::ECHILD)));
    }

    #[test]
    fn displays_errno_name() {
        let text = std::format!("{}", Error::Os(Errno::ENOENT));
        assert_eq!(text, "ENOENT");
    }
}
