// domain analytics ordering for listings
use modern_cli_shared_kernel::FileSize;

use crate::model::DirectoryEntry;

/// Sort by `(kind, name)`: directories first, then alphabetical within each group.
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
}

/// Sum of entry sizes. Directories contribute zero.
pub fn total_size(entries: &[DirectoryEntry]) -> FileSize {
    entries.iter().map(|e| e.size).sum()
}
