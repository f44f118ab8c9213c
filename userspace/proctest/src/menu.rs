//! The numbered test menu

use crate::console::Console;
use crate::error::Result;
use crate::kernel::Kernel;

/// One menu entry per test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    NonexistentFile = 1,
    NullArgument = 2,
    ExecError = 3,
    NonChildJoin = 4,
    ExecProgram = 5,
    JoinChild = 6,
    ExitProcess = 7,
}

impl Selection {
    /// Menu order.
    pub const ALL: [Selection; 7] = [
        Selection::NonexistentFile,
        Selection::NullArgument,
        Selection::ExecError,
        Selection::NonChildJoin,
        Selection::ExecProgram,
        Selection::JoinChild,
        Selection::ExitProcess,
    ];

    /// The entry numbered `choice`, if there is one.
    pub fn from_choice(choice: i32) -> Option<Selection> {
        Self::ALL.into_iter().find(|s| s.number() == choice)
    }

    pub fn number(self) -> i32 {
        self as i32
    }

    pub fn title(self) -> &'static str {
        match self {
            Selection::NonexistentFile => "Attempt to open non-existent file",
            Selection::NullArgument => "Attempt to open file with null argument",
            Selection::ExecError => "Execution error",
            Selection::NonChildJoin => "Attempt to join a non-child process",
            Selection::ExecProgram => "Execute process",
            Selection::JoinChild => "Join child process",
            Selection::ExitProcess => "Exit process",
        }
    }
}

pub fn render_menu<K: Kernel>(console: &mut Console<K>) -> Result<()> {
    for selection in Selection::ALL {
        console.println(format_args!("{}.  {}", selection.number(), selection.title()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_map_one_to_one() {
        for (index, selection) in Selection::ALL.into_iter().enumerate() {
            assert_eq!(Selection::from_choice(index as i32 + 1), Some(selection));
        }
    }

    #[test]
    fn out_of_range_choices() {
        assert_eq!(Selection::from_choice(0), None);
        assert_eq!(Selection::from_choice(8), None);
        assert_eq!(Selection::from_choice(-1), None);
    }
}
