mod args;
mod parsers;

pub use args::{Cli, Command, ListArgs, ProcessArgs};
pub use parsers::{ExistingDir, ExistingFile};
