// src/commands/list.rs
use std::io::Write;

use colored::Colorize;
use modern_cli_domain::GlobPattern;
use modern_cli_infra::FsDirectoryLister;
use modern_cli_shared_kernel::{Result, path::display_root};
use modern_cli_usecase::{ListDirectory, ListRequest, ListingOutput};

use super::CommandOutcome;
use crate::{
    config::ListConfig,
    context::AppContext,
    presentation::{json, table},
};

/// Run the `list` command. Any listing failure is fatal for the invocation.
pub fn run(ctx: &mut AppContext<'_>, config: &ListConfig) -> Result<CommandOutcome> {
    tracing::debug!(
        directory = %config.directory.display(),
        pattern = %config.pattern,
        "listing directory"
    );

    let listing = match list_entries(config) {
        Ok(listing) => listing,
        Err(err) if err.is_not_found() => {
            writeln!(ctx.diag(), "{}", format!("Error: {err}").red())?;
            writeln!(
                ctx.diag(),
                "{}",
                "Tip: Check the path exists and you have read permissions".yellow()
            )?;
            return Ok(CommandOutcome::Failed);
        }
        Err(err) => {
            writeln!(ctx.diag(), "{}", format!("Unexpected error: {err}").red())?;
            tracing::error!(error = ?err, "failed to list directory");
            return Ok(CommandOutcome::Failed);
        }
    };

    if config.json {
        writeln!(ctx.out(), "{}", json::render_entries(&listing.entries)?)?;
        return Ok(CommandOutcome::Success);
    }

    let title = format!("📁 {}", display_root(&config.directory).display());
    writeln!(ctx.diag(), "{}", title.bold())?;
    writeln!(ctx.diag(), "{}", table::render_listing(&listing.entries))?;
    let caption = format!("Found {} items matching '{}'", listing.entries.len(), config.pattern);
    writeln!(ctx.diag(), "{}", caption.dimmed())?;
    if ctx.is_verbose() {
        writeln!(ctx.diag())?;
        writeln!(ctx.diag(), "{}", format!("Total size: {:#} bytes", listing.total_size).dimmed())?;
    }
    Ok(CommandOutcome::Success)
}

fn list_entries(config: &ListConfig) -> Result<ListingOutput> {
    let pattern = GlobPattern::new(&config.pattern)?;
    let request = ListRequest { directory: config.directory.clone(), pattern };
    ListDirectory::new(&FsDirectoryLister).run(&request)
}
