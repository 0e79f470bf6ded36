//! Color rules and per-entry style resolution
//!
//! - `rules` - `LS_COLORS`-style parsing into a `ColorRuleTable`
//! - `resolve` - picks the `Style` for an entry name and kind

mod resolve;
mod rules;

pub use resolve::{DIRECTORY_KEY, Style, resolve_style};
pub use rules::{COLOR_ENV_VAR, ColorRuleTable, RuleColor, StyleRule, Weight};
