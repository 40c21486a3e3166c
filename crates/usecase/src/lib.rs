//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: batch transform of explicit file lists (continue-on-error)
//! - [`listing`]: single directory listings with totals
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on domain and ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod listing;
pub mod orchestrator;

pub use dto::{FileFailure, ListRequest, ListingOutput, PlannedOutput, ProcessReport, ProcessRequest, WrittenFile};
pub use listing::ListDirectory;
pub use orchestrator::ProcessFiles;
