// src/presentation/mod.rs
pub mod json;
pub mod progress;
pub mod prompt;
pub mod table;

use std::path::Path;

/// Base name for user-facing messages, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
