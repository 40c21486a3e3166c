// src/commands/process.rs
use std::io::Write;

use colored::Colorize;
use modern_cli_infra::{FsOutputWriter, FsTransformer};
use modern_cli_ports::{progress::ProgressSink, prompt::Confirmer};
use modern_cli_shared_kernel::Result;
use modern_cli_usecase::{ProcessFiles, ProcessRequest};

use super::CommandOutcome;
use crate::{
    config::ProcessConfig,
    context::AppContext,
    presentation::{display_name, table::render_panel},
};

/// Run the `process` command.
///
/// Several files need confirmation unless `--yes` or `--dry-run` is given. A dry run
/// only reports what would be written. Otherwise every file is attempted and failures
/// are reported together at the end.
pub fn run(
    ctx: &mut AppContext<'_>,
    config: &ProcessConfig,
    confirmer: &dyn Confirmer,
    progress: &dyn ProgressSink,
) -> Result<CommandOutcome> {
    let count = config.files.len();
    tracing::debug!(count, transform = %config.transform, "processing files");
    if !config.transform.is_known() {
        tracing::warn!(
            transform = %config.transform,
            "unknown transform, file contents will be copied unchanged"
        );
    }

    if count > 1 && !config.skip_confirmation && !config.dry_run {
        writeln!(ctx.diag(), "{}", format!("⚠️  About to process {count} files").yellow())?;
        if !confirmer.confirm("Continue?")? {
            writeln!(ctx.diag(), "{}", "Aborted by user".red())?;
            return Ok(CommandOutcome::Declined);
        }
    }

    let request = ProcessRequest {
        files: config.files.clone(),
        transform: config.transform.clone(),
        output_dir: config.output_dir.clone(),
    };

    if config.dry_run {
        writeln!(ctx.diag())?;
        writeln!(ctx.diag(), "{}", "🔍 DRY RUN - No files will be modified".cyan())?;
        for planned in ProcessFiles::plan(&request) {
            writeln!(
                ctx.diag(),
                "  Would process: {} → {} ({})",
                display_name(&planned.input),
                config.transform,
                planned.output.display()
            )?;
        }
        return Ok(CommandOutcome::Success);
    }

    let report = ProcessFiles::new(&FsTransformer, &FsOutputWriter)
        .with_progress(progress)
        .run(&request);

    if report.is_success() {
        let panel = render_panel("Complete", &format!("✨ Successfully processed {count} file(s)"));
        writeln!(ctx.diag(), "{}", panel.green())?;
        return Ok(CommandOutcome::Success);
    }

    writeln!(ctx.diag())?;
    writeln!(ctx.diag(), "{}", "⚠️  Some files failed:".red())?;
    for failure in &report.failures {
        let line = format!("  • {}: {}", display_name(&failure.input), failure.error);
        writeln!(ctx.diag(), "{}", line.red())?;
    }
    Ok(CommandOutcome::Failed)
}
