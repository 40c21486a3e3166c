// src/commands/mod.rs
pub mod list;
pub mod process;

use std::process::ExitCode;

/// How a command ended. `Declined` is a deliberate user abort, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    Failed,
    Declined,
}

impl CommandOutcome {
    /// Conventional status for an interrupted run (128 + SIGINT).
    pub const INTERRUPTED: u8 = 130;

    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failed => 1,
            Self::Declined => Self::INTERRUPTED,
        }
    }
}

impl From<CommandOutcome> for ExitCode {
    fn from(outcome: CommandOutcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CommandOutcome::Success.exit_code(), 0);
        assert_eq!(CommandOutcome::Failed.exit_code(), 1);
        assert_eq!(CommandOutcome::Declined.exit_code(), 130);
    }
}
