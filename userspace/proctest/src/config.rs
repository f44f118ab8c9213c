//! Harness configuration

use crate::error::{HarnessError, Result};

/// Filename buffer size, NUL included.
pub const DEFAULT_NAME_CAPACITY: usize = 20;
/// Longest path the kernel copies in from user memory.
pub const MAX_NAME_CAPACITY: usize = 256;
/// Random filenames are drawn from `0..DEFAULT_FILE_NAME_BOUND`.
pub const DEFAULT_FILE_NAME_BOUND: u32 = 99;
/// Random pids are drawn from `0..DEFAULT_PID_BOUND`.
pub const DEFAULT_PID_BOUND: u32 = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub name_capacity: usize,
    pub file_name_bound: u32,
    pub pid_bound: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name_capacity: DEFAULT_NAME_CAPACITY,
            file_name_bound: DEFAULT_FILE_NAME_BOUND,
            pid_bound: DEFAULT_PID_BOUND,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_NAME_CAPACITY).contains(&self.name_capacity) {
            return Err(HarnessError::Config(format!(
                "name capacity {} outside 2..={}",
                self.name_capacity, MAX_NAME_CAPACITY
            )));
        }
        if self.file_name_bound == 0 {
            return Err(HarnessError::Config("file name bound must be at least 1".into()));
        }
        if self.pid_bound == 0 {
            return Err(HarnessError::Config("pid bound must be at least 1".into()));
        }
        Ok(())
    }
}
