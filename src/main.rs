// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{
    io::{self, IsTerminal, Write},
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use modern_cli::{
    app,
    cli::Cli,
    commands::CommandOutcome,
    context::AppContext,
    logging::init_logging,
};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let verbosity = cli.command.verbosity();
    init_logging(verbosity);
    colored::control::set_override(io::stderr().is_terminal());

    let mut out = io::stdout();
    let mut diag = io::stderr();
    let outcome = {
        let mut ctx = AppContext::new(&mut out, &mut diag, verbosity);
        app::run(cli, &mut ctx)
    };

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(error = ?err, "command aborted");
            writeln!(diag, "{}", format!("Unexpected error: {err:#}").red())?;
            CommandOutcome::Failed
        }
    };

    out.flush()?;
    Ok(outcome.into())
}
