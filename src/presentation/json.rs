// src/presentation/json.rs
use modern_cli_domain::{DirectoryEntry, EntryKind};
use modern_cli_shared_kernel::Result;
use serde::Serialize;

/// Machine-readable projection of a listing entry.
#[derive(Debug, Serialize)]
struct EntryRecord<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: EntryKind,
    size: u64,
}

pub fn render_entries(entries: &[DirectoryEntry]) -> Result<String> {
    let records: Vec<_> = entries
        .iter()
        .map(|e| EntryRecord { name: e.name.as_str(), kind: e.kind, size: e.size.bytes() })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
