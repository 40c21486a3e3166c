// src/presentation/prompt.rs
use std::io::{self, BufRead, IsTerminal, Write};

use inquire::{Confirm, InquireError};
use modern_cli_ports::prompt::Confirmer;
use modern_cli_shared_kernel::{ApplicationError, Result};

/// Interactive yes/no on a terminal, a single answer line from stdin otherwise.
///
/// Cancelling or interrupting the prompt counts as "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, question: &str) -> Result<bool> {
        if io::stdin().is_terminal() {
            return match Confirm::new(question).with_default(false).prompt() {
                Ok(answer) => Ok(answer),
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
                Err(e) => Err(ApplicationError::PromptFailed { reason: e.to_string() }.into()),
            };
        }

        let mut stderr = io::stderr();
        write!(stderr, "{question} [y/N] ")?;
        stderr.flush()?;
        read_answer(&mut io::stdin().lock())
    }
}

/// Read one line and accept `y`/`yes` (any case). End of input declines.
pub fn read_answer(input: &mut impl BufRead) -> Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(is_yes(&line))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
