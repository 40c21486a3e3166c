// src/config.rs
//! Plain run configurations built from parsed arguments.

use std::path::PathBuf;

use modern_cli_domain::Transform;
use modern_cli_shared_kernel::{ErrorContext, ModernCliError};

use crate::cli::{ListArgs, ProcessArgs};

#[derive(Debug, Clone)]
pub struct ProcessConfig {
    pub files: Vec<PathBuf>,
    pub transform: Transform,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub skip_confirmation: bool,
}

impl TryFrom<ProcessArgs> for ProcessConfig {
    type Error = ModernCliError;

    fn try_from(args: ProcessArgs) -> Result<Self, Self::Error> {
        let output_dir = match args.output {
            Some(dir) => dir,
            None => std::env::current_dir().context("resolving the current directory")?,
        };
        Ok(Self {
            files: args.files.into_iter().map(|f| f.0).collect(),
            transform: Transform::from_name(&args.transform),
            output_dir,
            dry_run: args.dry_run,
            skip_confirmation: args.yes,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ListConfig {
    pub directory: PathBuf,
    /// Raw glob; compiled when the listing runs so a bad pattern fails like any other listing error.
    pub pattern: String,
    pub json: bool,
}

impl From<ListArgs> for ListConfig {
    fn from(args: ListArgs) -> Self {
        Self {
            directory: args.directory.0,
            pattern: args.pattern,
            json: args.json,
        }
    }
}
