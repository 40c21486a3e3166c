// crates/ports/src/filesystem.rs
use std::path::Path;

use modern_cli_domain::{DirectoryEntry, GlobPattern, Transform, TransformResult};
use modern_cli_shared_kernel::Result;

/// Port for reading one file and transforming its contents.
pub trait FileTransformer {
    fn transform(&self, path: &Path, transform: &Transform) -> Result<TransformResult>;
}

/// Port for writing transformed text to its destination.
pub trait OutputWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Port for a single-level, pattern-filtered directory scan.
pub trait DirectoryLister {
    /// Entries must come back sorted by `(kind, name)`.
    fn list(&self, directory: &Path, pattern: &GlobPattern) -> Result<Vec<DirectoryEntry>>;
}
