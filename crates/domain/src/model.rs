pub mod entities;

pub use entities::{DirectoryEntry, EntryKind, TransformResult};
