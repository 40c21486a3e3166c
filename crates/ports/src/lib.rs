//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: reading and transforming files, listing directories, writing outputs
//! - [`progress`]: progress reporting for batch runs
//! - [`prompt`]: interactive confirmation
//!
//! These ports keep the use cases independent of the real filesystem and terminal.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod progress;
pub mod prompt;
