//! The syscall seam between the harness and the kernel

use std::ffi::CString;

use libsys::{io, process, Errno, Error, Fd, Joined, Pid};

/// Argument vector handed to `exec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecArgs {
    /// argc 0, no arguments.
    Empty,
    /// Claims `argc` arguments but passes a null argv pointer.
    Null { argc: usize },
}

impl ExecArgs {
    pub fn argc(&self) -> usize {
        match self {
            ExecArgs::Empty => 0,
            ExecArgs::Null { argc } => *argc,
        }
    }
}

/// The operations a test case may ask of the kernel.
pub trait Kernel {
    /// Start `program` as a child, returning its pid. `program` is the raw
    /// name bytes as typed, without the NUL.
    fn exec(&mut self, program: &[u8], args: &ExecArgs) -> Result<Pid, Error>;

    /// Wait for child `pid` to exit.
    fn join(&mut self, pid: Pid) -> Result<Joined, Error>;

    /// Terminate the calling process. Returns only when the kernel kept the
    /// process running, with whatever value the kernel returned.
    fn exit(&mut self, status: i32) -> i64;

    /// Stop the machine. `Err` when the kernel refused.
    fn halt(&mut self) -> Result<(), Error>;

    /// Read console input. 0 at end of input.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error>;

    /// Write console output, returning how much was accepted.
    fn write(&mut self, bytes: &[u8]) -> Result<usize, Error>;
}

/// [`Kernel`] backed by the real syscalls.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyscallKernel;

impl Kernel for SyscallKernel {
    fn exec(&mut self, program: &[u8], args: &ExecArgs) -> Result<Pid, Error> {
        let path = CString::new(program).map_err(|_| Error::Os(Errno::EINVAL))?;
        match args {
            ExecArgs::Empty => process::exec(&path),
            // SAFETY: the path is NUL-terminated; the null argv is the fault
            // under test and the kernel validates it before use.
            ExecArgs::Null { argc } => unsafe {
                process::exec_raw(path.as_ptr().cast(), *argc, core::ptr::null())
            },
        }
    }

    fn join(&mut self, pid: Pid) -> Result<Joined, Error> {
        process::join(pid)
    }

    fn exit(&mut self, status: i32) -> i64 {
        process::exit(status)
    }

    fn halt(&mut self) -> Result<(), Error> {
        Err(process::halt())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        io::read(Fd::STDIN, buf)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        io::write(Fd::STDOUT, bytes)
    }
}
