//! Directory tree walking logic
//!
//! `TreeWalker` lists each directory's visible entries in byte order and
//! streams them to a `TreeOutput` with `├── `/`└── ` branch glyphs,
//! recursing until the depth budget runs out.

mod config;
mod entry;
mod traversal;
mod walker;

// Re-export public types
pub use config::{Depth, WalkerConfig};
pub use entry::{Entry, EntryKind, is_hidden};
pub use traversal::{BLANK, BRANCH, LAST_BRANCH, PIPE, child_prefix, connector, list_visible_entries};
pub use walker::{Counts, TreeOutput, TreeWalker};
