use std::path::PathBuf;

use modern_cli_domain::{DirectoryEntry, GlobPattern, Transform};
use modern_cli_shared_kernel::{FileSize, ModernCliError};

/// Input for a batch transform run.
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    pub files: Vec<PathBuf>,
    pub transform: Transform,
    pub output_dir: PathBuf,
}

/// Where one input would be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOutput {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub processed_size: usize,
}

#[derive(Debug)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: ModernCliError,
}

/// Per-file results of a batch run, in input order.
#[derive(Debug, Default)]
pub struct ProcessReport {
    pub written: Vec<WrittenFile>,
    pub failures: Vec<FileFailure>,
}

impl ProcessReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.written.len() + self.failures.len()
    }
}

#[derive(Debug, Clone)]
pub struct ListRequest {
    pub directory: PathBuf,
    pub pattern: GlobPattern,
}

#[derive(Debug, Clone)]
pub struct ListingOutput {
    pub entries: Vec<DirectoryEntry>,
    pub total_size: FileSize,
}
