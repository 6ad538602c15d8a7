//! Render command results as text for the shell.

use crate::commands::DirEntry;
use crate::meta::EntryKind;
use owo_colors::OwoColorize;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a directory listing: one entry per line in insertion order,
/// directories suffixed `/`, files with their size and creation time.
pub fn format_listing(entries: &[DirEntry], color: bool) -> String {
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| match entry.kind {
            EntryKind::Directory => {
                if color {
                    format!("{}/", entry.name.blue().bold())
                } else {
                    format!("{}/", entry.name)
                }
            }
            EntryKind::File => format!(
                "{}\t{}B\t{}",
                entry.name,
                entry.size.unwrap_or_default(),
                entry.created.format(TIMESTAMP_FORMAT)
            ),
        })
        .collect();
    lines.join("\n")
}
