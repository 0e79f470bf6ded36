//! Twig - a tree command that colors names from LS_COLORS

pub mod color;
pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use color::{ColorRuleTable, Style, StyleRule, resolve_style};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use output::{OutputConfig, StreamingFormatter};
pub use tree::{Counts, Depth, EntryKind, TreeOutput, TreeWalker, WalkerConfig};
