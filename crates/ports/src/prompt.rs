// crates/ports/src/prompt.rs
use modern_cli_shared_kernel::Result;

/// Asks the user a yes/no question. `Ok(false)` means the user declined.
pub trait Confirmer {
    fn confirm(&self, question: &str) -> Result<bool>;
}
