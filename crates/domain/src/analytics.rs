//! Ordering and totals over directory listings.

pub mod sort;

pub use sort::{sort_entries, total_size};
