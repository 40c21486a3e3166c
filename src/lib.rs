// Transitive dependencies pull in more than one version of a few crates.
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod logging;
pub mod presentation;
pub mod version;

pub use version::VERSION;
