//! User-space system call library for the teaching kernel's process syscalls
//!
//! This library wraps the kernel's trap interface so that user programs can
//! start, join and terminate processes without writing inline assembly.
//!
//! # Usage
//!
//! ```rust,ignore
//! use libsys::process::{exec, join};
//!
//! let child = exec(c"echo.coff")?;
//! let joined = join(child)?;
//! ```

#![cfg_attr(not(test), no_std)]

pub use errno::Errno;
pub use error::Error;
pub use syscall::raw;
pub use types::*;

pub mod errno;
pub mod error;
pub mod io;
pub mod process;
pub mod syscall;
pub mod types;
