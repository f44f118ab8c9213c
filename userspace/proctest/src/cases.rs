//! The seven test cases
//!
//! Each case makes at most one process syscall and reports what the kernel
//! answered. Syscall failures are the observation, not an error.

use log::{debug, info};
use rand::Rng;

use libsys::Pid;

use crate::error::Result;
use crate::harness::Harness;
use crate::kernel::{ExecArgs, Kernel};
use crate::menu::Selection;

const EXISTING_PROGRAM_PROMPT: &str = "Enter the name of a program that DOES exist.";

impl<K: Kernel, R: Rng> Harness<K, R> {
    pub(crate) fn run_case(&mut self, selection: Selection) -> Result<()> {
        match selection {
            Selection::NonexistentFile => self.nonexistent_file(),
            Selection::NullArgument => self.null_argument(),
            Selection::ExecError => self.exec_error(),
            Selection::NonChildJoin => self.non_child_join(),
            Selection::ExecProgram => self.exec_program(),
            Selection::JoinChild => self.join_child(),
            Selection::ExitProcess => self.exit_process(),
        }
    }

    fn nonexistent_file(&mut self) -> Result<()> {
        let name = self.rng.gen_range(0..self.config.file_name_bound).to_string();
        self.attempt_exec(name.as_bytes(), ExecArgs::Empty)
    }

    fn null_argument(&mut self) -> Result<()> {
        let name = self.prompt_name()?;
        self.attempt_exec(&name, ExecArgs::Null { argc: 1 })
    }

    fn exec_error(&mut self) -> Result<()> {
        self.console.println(format_args!(
            "I'm not actually sure how to cause an execution error. Sorry."
        ))?;
        Ok(())
    }

    fn non_child_join(&mut self) -> Result<()> {
        let pid = Pid::from_raw(u64::from(self.rng.gen_range(0..self.config.pid_bound)));
        self.console.println(format_args!(
            "I'm hoping that the rand method will return the PID of a non-child process."
        ))?;
        self.attempt_join(pid)
    }

    fn exec_program(&mut self) -> Result<()> {
        let name = self.prompt_name()?;
        self.attempt_exec(&name, ExecArgs::Empty)
    }

    fn join_child(&mut self) -> Result<()> {
        self.console.println(format_args!("Enter the pid of a program that IS a parent."))?;
        let pid = Pid::from_signed(self.console.read_int()?);
        self.attempt_join(pid)
    }

    fn exit_process(&mut self) -> Result<()> {
        self.console.println(format_args!("Enter the exit status for this process."))?;
        let status = self.console.read_int()?;
        debug!("exit({})", status);
        let returned = self.console.kernel_mut().exit(status);
        info!("exit({}) returned {}", status, returned);
        self.console.println(format_args!("exit({}) returned {}", status, returned))
    }

    fn prompt_name(&mut self) -> Result<Vec<u8>> {
        self.console.println(format_args!("{}", EXISTING_PROGRAM_PROMPT))?;
        self.console.read_name(self.config.name_capacity)
    }

    fn attempt_exec(&mut self, name: &[u8], args: ExecArgs) -> Result<()> {
        let shown = name.escape_ascii();
        debug!("exec(\"{}\", argc={}, {:?})", shown, args.argc(), args);
        match self.console.kernel_mut().exec(name, &args) {
            Ok(pid) => {
                info!("exec(\"{}\") -> pid {}", shown, pid);
                self.console.println(format_args!("exec(\"{}\") started pid {}", shown, pid))?;
            }
            Err(e) => {
                info!("exec(\"{}\") -> {}", shown, e);
                self.console.println(format_args!("exec(\"{}\") failed: {}", shown, e))?;
            }
        }
        Ok(())
    }

    fn attempt_join(&mut self, pid: Pid) -> Result<()> {
        debug!("join({})", pid);
        match self.console.kernel_mut().join(pid) {
            Ok(joined) => {
                let kind = if joined.normal { "normal" } else { "abnormal" };
                info!("join({}) -> status {} ({})", pid, joined.status, kind);
                self.console
                    .println(format_args!("join({}) -> status {} ({})", pid, joined.status, kind))?;
            }
            Err(e) => {
                info!("join({}) -> {}", pid, e);
                self.console.println(format_args!("join({}) failed: {}", pid, e))?;
            }
        }
        Ok(())
    }
}
