//! proctest entry point
//!
//! Binds the harness to the real syscalls. Output the cases produce goes to
//! the kernel console; diagnostics go through `log` to stderr.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{ArgAction, Parser};
use log::{debug, error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use proctest::config::{DEFAULT_FILE_NAME_BOUND, DEFAULT_NAME_CAPACITY, DEFAULT_PID_BOUND};
use proctest::{Config, Harness, SyscallKernel};

#[derive(Debug, Parser)]
#[command(name = "proctest", version, about = "Exercise the exec/join/exit/halt syscalls")]
struct Args {
    /// RNG seed for the random filename and pid cases (default: current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Filename buffer size in bytes, NUL included
    #[arg(long, default_value_t = DEFAULT_NAME_CAPACITY)]
    name_capacity: usize,

    /// Random filenames are drawn from 0..FILE_BOUND
    #[arg(long, default_value_t = DEFAULT_FILE_NAME_BOUND)]
    file_bound: u32,

    /// Random pids are drawn from 0..PID_BOUND
    #[arg(long, default_value_t = DEFAULT_PID_BOUND)]
    pid_bound: u32,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            name_capacity: self.name_capacity,
            file_name_bound: self.file_bound,
            pid_bound: self.pid_bound,
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level());

    let config = args.config();
    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("rng seed {}", seed);

    let mut harness = match Harness::new(SyscallKernel, StdRng::seed_from_u64(seed), config) {
        Ok(harness) => harness,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    match harness.run() {
        Ok(termination) => {
            debug!("{:?}", termination);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
