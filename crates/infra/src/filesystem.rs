// crates/infra/src/filesystem.rs
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use modern_cli_domain::{
    DirectoryEntry, GlobPattern, Transform, TransformResult, analytics::sort_entries,
};
use modern_cli_ports::filesystem::{DirectoryLister, FileTransformer, OutputWriter};
use modern_cli_shared_kernel::{InfrastructureError, ModificationTime, Result};

use crate::persistence::{FileReader, FileWriter};

/// Read `path` as text and apply `transform` to it. Read-only.
pub fn transform_file(path: &Path, transform: &Transform) -> Result<TransformResult> {
    let content = FileReader::read_to_string(path).map_err(|source| read_error(path, source))?;
    Ok(TransformResult::new(transform.clone(), &content))
}

/// Scan the direct children of `directory` whose names match `pattern`.
///
/// The scan never descends into subdirectories. Entries that vanish between the
/// directory read and their metadata lookup are skipped; any other metadata
/// failure, including a dangling symlink, aborts the listing.
pub fn list_directory(directory: &Path, pattern: &GlobPattern) -> Result<Vec<DirectoryEntry>> {
    let meta = fs::metadata(directory).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InfrastructureError::DirectoryNotFound { path: directory.to_path_buf() },
        _ => InfrastructureError::Metadata { path: directory.to_path_buf(), source },
    })?;
    if !meta.is_dir() {
        return Err(InfrastructureError::NotADirectory { path: directory.to_path_buf() }.into());
    }

    let dir_error = |source| InfrastructureError::DirectoryRead { path: directory.to_path_buf(), source };
    let mut entries = Vec::new();
    for item in fs::read_dir(directory).map_err(dir_error)? {
        let item = item.map_err(dir_error)?;
        let name = item.file_name().to_string_lossy().into_owned();
        if !pattern.matches(&name) {
            continue;
        }

        let path = item.path();
        match build_entry(&path, name) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {
                tracing::debug!(path = %path.display(), "entry disappeared during scan, skipping");
            }
            Err(source) => return Err(InfrastructureError::Metadata { path, source }.into()),
        }
    }

    sort_entries(&mut entries);
    Ok(entries)
}

// Follows symlinks, so a link to a directory lists as a directory.
// `Ok(None)` only when the entry itself is gone; a dangling link is an error.
fn build_entry(path: &Path, name: String) -> std::io::Result<Option<DirectoryEntry>> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return match fs::symlink_metadata(path) {
                Err(gone) if gone.kind() == ErrorKind::NotFound => Ok(None),
                _ => Err(err),
            };
        }
        Err(err) => return Err(err),
    };
    let modified = ModificationTime::from(metadata.modified()?);
    Ok(Some(if metadata.is_dir() {
        DirectoryEntry::directory(name, modified)
    } else {
        let size = if metadata.is_file() { metadata.len() } else { 0 };
        DirectoryEntry::file(name, size, modified)
    }))
}

fn read_error(path: &Path, source: std::io::Error) -> InfrastructureError {
    match source.kind() {
        ErrorKind::NotFound => InfrastructureError::FileNotFound { path: path.to_path_buf() },
        _ => InfrastructureError::FileRead { path: path.to_path_buf(), source },
    }
}

/// Filesystem adapter implementing the `FileTransformer` port.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTransformer;

impl FileTransformer for FsTransformer {
    fn transform(&self, path: &Path, transform: &Transform) -> Result<TransformResult> {
        transform_file(path, transform)
    }
}

/// Filesystem adapter implementing the `DirectoryLister` port.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, directory: &Path, pattern: &GlobPattern) -> Result<Vec<DirectoryEntry>> {
        list_directory(directory, pattern)
    }
}

/// Filesystem adapter implementing the `OutputWriter` port.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsOutputWriter;

impl OutputWriter for FsOutputWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        FileWriter::write_text(path, contents).map_err(|source| {
            InfrastructureError::FileWrite { path: PathBuf::from(path), source }.into()
        })
    }
}
