// src/app.rs
use anyhow::{Context, Result};

use crate::{
    cli::{Cli, Command},
    commands::{self, CommandOutcome},
    config::{ListConfig, ProcessConfig},
    context::AppContext,
    presentation::{progress::BarProgress, prompt::TerminalConfirmer},
};

/// Dispatch a parsed command line to its handler.
pub fn run(cli: Cli, ctx: &mut AppContext<'_>) -> Result<CommandOutcome> {
    match cli.command {
        Command::Process(args) => {
            let config = ProcessConfig::try_from(args).context("failed to build process configuration")?;
            let progress = BarProgress::stderr();
            commands::process::run(ctx, &config, &TerminalConfirmer, &progress)
                .context("process command failed")
        }
        Command::List(args) => {
            let config = ListConfig::from(args);
            commands::list::run(ctx, &config).context("list command failed")
        }
    }
}
