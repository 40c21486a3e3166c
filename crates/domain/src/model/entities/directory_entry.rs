use std::fmt;

use modern_cli_shared_kernel::{FileName, FileSize, ModificationTime};
use serde::{Deserialize, Serialize};

/// Kind of a listed entry. Variant order is the listing order: directories first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::File => "file",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One direct child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: FileName,
    pub kind: EntryKind,
    /// Byte length for files, always zero for directories.
    pub size: FileSize,
    pub modified: ModificationTime,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<String>, size: u64, modified: ModificationTime) -> Self {
        Self {
            name: FileName::new(name),
            kind: EntryKind::File,
            size: FileSize::new(size),
            modified,
        }
    }

    pub fn directory(name: impl Into<String>, modified: ModificationTime) -> Self {
        Self {
            name: FileName::new(name),
            kind: EntryKind::Directory,
            size: FileSize::zero(),
            modified,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
