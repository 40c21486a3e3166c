// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;

pub use file_info::{FileName, FileSize, ModificationTime};
