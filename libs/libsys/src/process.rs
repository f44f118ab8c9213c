//! Process management syscall wrappers

use core::ffi::CStr;

use crate::errno::Errno;
use crate::error::Error;
use crate::syscall::{nr, raw};
use crate::types::{Joined, Pid};

/// Stop the machine.
///
/// Returns only if the kernel refused to halt.
#[inline]
pub fn halt() -> Error {
    let ret = unsafe { raw::syscall0(nr::HALT) } as i64;
    match Error::from_syscall(ret) {
        Err(e) => e,
        Ok(_) => Error::Os(Errno::EPERM),
    }
}

/// Exit the current process with the given status.
///
/// A kernel that tears the process down never comes back from the trap.
/// One that only records the status returns, and the value it handed back
/// (usually the status itself) is returned unchanged.
#[inline]
pub fn exit(status: i32) -> i64 {
    unsafe { raw::syscall1(nr::EXIT, status as i64 as u64) as i64 }
}

/// Start `path` as a child process with no arguments.
///
/// # Returns
/// The child's pid.
pub fn exec(path: &CStr) -> Result<Pid, Error> {
    let argv: [*const u8; 1] = [core::ptr::null()];
    unsafe { exec_raw(path.as_ptr().cast(), 0, argv.as_ptr()) }
}

/// Start `path` with a caller-built argument vector.
///
/// # Safety
/// `path` must point to a NUL-terminated string. The kernel reads `argc`
/// pointers from `argv`; a null or short `argv` is only sound to pass when
/// the kernel validates it, which is what fault-injection callers rely on.
pub unsafe fn exec_raw(path: *const u8, argc: usize, argv: *const *const u8) -> Result<Pid, Error> {
    let ret = raw::syscall3(nr::EXEC, path as u64, argc as u64, argv as u64) as i64;
    Error::from_syscall(ret).map(Pid::from_raw)
}

/// Wait for child `pid` to exit.
///
/// The kernel writes the child's status through the pointer it is handed
/// and returns 1 for a normal exit, 0 for an abnormal one.
///
/// # Returns
/// `EPERM` when `pid` is not a child of the caller.
pub fn join(pid: Pid) -> Result<Joined, Error> {
    let mut status: i32 = 0;
    let ret = unsafe { raw::syscall2(nr::JOIN, pid.raw(), &mut status as *mut i32 as u64) } as i64;
    let kind = Error::from_syscall(ret)?;
    Ok(Joined { status, normal: kind == 1 })
}
