//! Directory listing and branch glyphs shared by the walker

use std::io;
use std::path::Path;

use super::entry::{Entry, is_hidden};

/// Connector for every entry but the last in its sibling group.
pub const BRANCH: &str = "├── ";
/// Connector for the last entry in its sibling group.
pub const LAST_BRANCH: &str = "└── ";
/// Prefix continuation below a non-last entry.
pub const PIPE: &str = "│   ";
/// Prefix continuation below the last entry.
pub const BLANK: &str = "    ";

/// Read a directory's visible entries, sorted byte-wise by name.
///
/// The `ReadDir` handle is dropped before this returns. Items that fail
/// mid-iteration are skipped.
pub fn list_visible_entries(path: &Path) -> io::Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = std::fs::read_dir(path)?
        .filter_map(|e| e.ok())
        .filter(|e| !is_hidden(&e.file_name()))
        .map(|e| Entry::from_dir_entry(&e))
        .collect();

    entries.sort_by(|a, b| a.name.as_encoded_bytes().cmp(b.name.as_encoded_bytes()));
    Ok(entries)
}

/// Branch glyph for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for an entry's children.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let continuation = if is_last { BLANK } else { PIPE };
    format!("{}{}", prefix, continuation)
}
