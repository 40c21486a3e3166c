// src/cli/args.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};
use modern_cli_domain::{GlobPattern, Transform};

use super::parsers::{ExistingDir, ExistingFile};
use crate::context::Verbosity;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = crate::version::BIN_NAME,
    version = crate::VERSION,
    about = "✨ Modern CLI Tool - Process and manage data with style",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process files with transformations and progress feedback
    Process(ProcessArgs),
    /// List directory contents in a table
    List(ListArgs),
}

impl Command {
    pub fn verbosity(&self) -> Verbosity {
        match self {
            Self::Process(args) => args.verbose.into(),
            Self::List(args) => args.verbose.into(),
        }
    }
}

#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ProcessArgs {
    /// Files to process
    #[arg(required = true, value_name = "FILES", value_hint = ValueHint::FilePath)]
    pub files: Vec<ExistingFile>,

    /// Transformation to apply (upper, lower; other names copy content unchanged)
    #[arg(
        short,
        long,
        default_value = Transform::DEFAULT_NAME,
        help_heading = "Processing Options"
    )]
    pub transform: String,

    /// Output directory (default: current)
    #[arg(
        short,
        long,
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help_heading = "Processing Options"
    )]
    pub output: Option<PathBuf>,

    /// Preview changes without writing
    #[arg(long, help_heading = "Safety Options")]
    pub dry_run: bool,

    /// Skip confirmation prompts
    #[arg(short, long, help_heading = "Safety Options")]
    pub yes: bool,

    /// Enable debug output
    #[arg(short, long, help_heading = "Advanced Options")]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to list
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub directory: ExistingDir,

    /// Glob pattern to filter
    #[arg(short, long, default_value = GlobPattern::MATCH_ALL, help_heading = "Filter Options")]
    pub pattern: String,

    /// Output as JSON
    #[arg(long, help_heading = "Output Options")]
    pub json: bool,

    /// Show additional details
    #[arg(short, long, help_heading = "Advanced Options")]
    pub verbose: bool,
}
