//! Common types used across libsys

/// A file descriptor. This is a lightweight copyable handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Fd(u64);

impl Fd {
    pub const STDIN: Fd = Fd(0);
    pub const STDOUT: Fd = Fd(1);

    pub const fn from_raw(raw: u64) -> Self {
        Fd(raw)
    }
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Process ID type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Pid(u64);

impl Pid {
    pub const fn from_raw(raw: u64) -> Self {
        Pid(raw)
    }

    /// A pid as typed by a user. Negative values keep their bit pattern so
    /// the kernel sees (and rejects) them unchanged.
    pub const fn from_signed(raw: i32) -> Self {
        Pid(raw as i64 as u64)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The pid as a C `int`, which is how the kernel stores it.
    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }
}

impl core::fmt::Display for Pid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

/// Outcome of a successful join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Joined {
    /// Exit status the child passed to `exit`.
    pub status: i32,
    /// The kernel reports a normal exit when the status was zero.
    pub normal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_pid_keeps_bit_pattern() {
        let pid = Pid::from_signed(-3);
        assert_eq!(pid.raw(), u64::MAX - 2);
        assert_eq!(pid.as_i32(), -3);
        assert_eq!(std::format!("{}", pid), "-3");
    }
}
