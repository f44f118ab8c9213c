//! Harness error type

use thiserror::Error;

/// Errors raised while driving a test case.
///
/// Failures of the syscalls under test are not errors here; they are the
/// result being observed and get reported on the console instead.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("input ended before a value was entered")]
    InputClosed,

    #[error("'{0}' is not an integer")]
    InvalidNumber(String),

    #[error("name is {len} bytes but the buffer holds {capacity} bytes including the NUL")]
    NameTooLong { len: usize, capacity: usize },

    #[error("console: {0}")]
    Console(#[source] libsys::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = core::result::Result<T, HarnessError>;
