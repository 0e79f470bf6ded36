//! Style resolution for a single directory entry

use termcolor::ColorSpec;

use crate::tree::EntryKind;

use super::rules::{ColorRuleTable, StyleRule};

/// Key under which the directory rule is stored.
pub const DIRECTORY_KEY: &str = "di";

/// Number of trailing name bytes used as the extension key.
const EXTENSION_KEY_LEN: usize = 4;

/// Style applied to an entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Terminal default color, no bold.
    #[default]
    Default,
    Rule(StyleRule),
}

impl Style {
    pub fn color_spec(&self) -> ColorSpec {
        match self {
            Style::Default => ColorSpec::new(),
            Style::Rule(rule) => rule.color_spec(),
        }
    }
}

/// Resolve the style for an entry.
///
/// Directories always use the `di` rule and never fall through to extension
/// matching. Other entries longer than four bytes are keyed by their last
/// four bytes, so `notes.txt` looks up `.txt`. No `.` is required in those
/// bytes: `eight` looks up `ight`.
pub fn resolve_style(name: &str, kind: EntryKind, rules: &ColorRuleTable) -> Style {
    let rule = match kind {
        EntryKind::Directory => rules.get(DIRECTORY_KEY),
        EntryKind::Other => extension_key(name).and_then(|key| rules.get(key)),
    };

    rule.copied().map(Style::Rule).unwrap_or_default()
}

/// The last four bytes of `name`, if it is long enough and they are valid UTF-8.
fn extension_key(name: &str) -> Option<&str> {
    let bytes = name.as_bytes();
    if bytes.len() <= EXTENSION_KEY_LEN {
        return None;
    }
    std::str::from_utf8(&bytes[bytes.len() - EXTENSION_KEY_LEN..]).ok()
}
