// src/context.rs
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn is_verbose(self) -> bool {
        self == Self::Verbose
    }
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        if verbose { Self::Verbose } else { Self::Normal }
    }
}

/// Streams and verbosity handed to every command handler.
///
/// `out` carries machine-readable output only; tables, prompts, progress and
/// diagnostics go to `diag` so piping `out` stays clean.
pub struct AppContext<'a> {
    out: &'a mut dyn Write,
    diag: &'a mut dyn Write,
    verbosity: Verbosity,
}

impl<'a> AppContext<'a> {
    pub fn new(out: &'a mut dyn Write, diag: &'a mut dyn Write, verbosity: Verbosity) -> Self {
        Self { out, diag, verbosity }
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn diag(&mut self) -> &mut dyn Write {
        &mut *self.diag
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity.is_verbose()
    }
}
