#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;
pub mod naming;
pub mod transform;

pub use config::GlobPattern;
pub use model::{DirectoryEntry, EntryKind, TransformResult};
pub use transform::Transform;
