//! proctest: interactive exercise harness for the kernel's process syscalls
//!
//! Presents a numbered menu, runs the selected test case against `exec`,
//! `join` or `exit`, then halts the machine. The harness is generic over
//! [`Kernel`] so the same dispatch runs against the real syscalls
//! ([`SyscallKernel`]) or a scripted stand-in.

mod cases;
pub mod config;
pub mod console;
pub mod error;
pub mod harness;
pub mod kernel;
pub mod menu;

pub use config::Config;
pub use error::{HarnessError, Result};
pub use harness::{Harness, Termination};
pub use kernel::{ExecArgs, Kernel, SyscallKernel};
pub use menu::Selection;
