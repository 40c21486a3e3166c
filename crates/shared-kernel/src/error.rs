// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ModernCliError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ModernCliError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

impl ModernCliError {
    /// True when the target file or directory did not exist, looking through context layers.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_not_found(),
            Self::Infrastructure(err) => err.is_not_found(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModernCliError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern {
        pattern: String,
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("output '{output}' was already written from '{first_input}' in this run")]
    OutputCollision { output: PathBuf, first_input: PathBuf },

    #[error("Confirmation prompt failed: {reason}")]
    PromptFailed { reason: String },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read metadata for '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl InfrastructureError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::DirectoryNotFound { .. })
    }
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for ModernCliError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ModernCliError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ModernCliError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ModernCliError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}
