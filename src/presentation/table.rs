// src/presentation/table.rs
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use modern_cli_domain::DirectoryEntry;

pub fn render_listing(entries: &[DirectoryEntry]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Type", "Size", "Modified"]);

    for entry in entries {
        let size = if entry.is_dir() { "-".to_string() } else { entry.size.to_grouped() };
        table.add_row(vec![
            Cell::new(entry.name.as_str()),
            Cell::new(entry.kind),
            Cell::new(size).set_alignment(CellAlignment::Right),
            Cell::new(entry.modified.to_short()),
        ]);
    }

    table.to_string()
}

/// Single-cell boxed message with a title row.
pub fn render_panel(title: &str, message: &str) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![Cell::new(title).set_alignment(CellAlignment::Center)])
        .add_row(vec![message]);
    table.to_string()
}
