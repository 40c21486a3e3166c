pub mod directory_entry;
pub mod transform_result;

pub use directory_entry::{DirectoryEntry, EntryKind};
pub use transform_result::TransformResult;
