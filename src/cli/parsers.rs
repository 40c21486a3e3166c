// src/cli/parsers.rs
use std::{fs, path::PathBuf, str::FromStr};

use modern_cli_shared_kernel::PresentationError;

/// Path argument that must name an existing regular file (symlinks are followed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingFile(pub PathBuf);

impl FromStr for ExistingFile {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = PathBuf::from(s);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(Self(path)),
            Ok(meta) if meta.is_dir() => Err(invalid("FILES", s, "is a directory")),
            Ok(_) => Err(invalid("FILES", s, "is not a regular file")),
            Err(_) => Err(invalid("FILES", s, "does not exist")),
        }
    }
}

/// Path argument that must name an existing directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingDir(pub PathBuf);

impl FromStr for ExistingDir {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = PathBuf::from(s);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => Ok(Self(path)),
            Ok(_) => Err(invalid("DIRECTORY", s, "is not a directory")),
            Err(_) => Err(invalid("DIRECTORY", s, "does not exist")),
        }
    }
}

fn invalid(flag: &str, value: &str, reason: &str) -> PresentationError {
    PresentationError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
