//! Menu dispatch: one selection, one test case, then halt

use log::{debug, info, warn};
use rand::Rng;

use crate::config::Config;
use crate::console::Console;
use crate::error::{HarnessError, Result};
use crate::kernel::Kernel;
use crate::menu::{render_menu, Selection};

/// How a harness run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The case ran and the machine was halted.
    Halted { selection: Selection },
    /// The case ran but the kernel would not halt.
    HaltRefused { selection: Selection, error: libsys::Error },
    /// The input named no test case; nothing ran.
    NoSelection,
}

pub struct Harness<K, R> {
    pub(crate) console: Console<K>,
    pub(crate) rng: R,
    pub(crate) config: Config,
}

impl<K: Kernel, R: Rng> Harness<K, R> {
    pub fn new(kernel: K, rng: R, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            console: Console::new(kernel),
            rng,
            config,
        })
    }

    pub fn into_kernel(self) -> K {
        self.console.into_kernel()
    }

    /// Show the menu, run the chosen case, then halt.
    ///
    /// A case that fails on bad input is reported and the halt still
    /// happens. Only console failures abort the run.
    pub fn run(&mut self) -> Result<Termination> {
        render_menu(&mut self.console)?;

        let Some(selection) = self.read_selection()? else {
            return Ok(Termination::NoSelection);
        };
        info!("test case {}: {}", selection.number(), selection.title());

        match self.run_case(selection) {
            Ok(()) => {}
            Err(e @ HarnessError::Console(_)) => return Err(e),
            Err(e) => {
                warn!("test case {} aborted: {}", selection.number(), e);
                self.console.println(format_args!("error: {}", e))?;
            }
        }

        self.halt(selection)
    }

    fn read_selection(&mut self) -> Result<Option<Selection>> {
        match self.console.read_int() {
            Ok(choice) => {
                let selection = Selection::from_choice(choice);
                if selection.is_none() {
                    warn!("selection {} is not on the menu", choice);
                }
                Ok(selection)
            }
            Err(e @ HarnessError::Console(_)) => Err(e),
            Err(e) => {
                warn!("no usable selection: {}", e);
                Ok(None)
            }
        }
    }

    fn halt(&mut self, selection: Selection) -> Result<Termination> {
        debug!("halt()");
        match self.console.kernel_mut().halt() {
            Ok(()) => Ok(Termination::Halted { selection }),
            Err(error) => {
                warn!("halt refused: {}", error);
                self.console.println(format_args!("halt() refused: {}", error))?;
                Ok(Termination::HaltRefused { selection, error })
            }
        }
    }
}
