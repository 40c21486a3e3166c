use std::path::{Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Best-effort display form of a directory: canonical when possible, logical otherwise.
pub fn display_root(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| logical_absolute(path))
}
