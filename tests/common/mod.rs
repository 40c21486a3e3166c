// tests/common/mod.rs
//! Shared helpers for the end-to-end suites.

pub mod temp;

pub use temp::TempDir;

use assert_cmd::Command;

pub fn modern_cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_modern-cli"))
}
