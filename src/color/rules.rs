//! Color rule table parsed from an `LS_COLORS`-style specification
//!
//! The accepted syntax is `key=weight;color:key=weight;color:...`. Keys are
//! either a two-letter type marker (`di` for directories) or an extension
//! glob such as `*.rs`, whose leading `*` is stripped rather than matched.

use std::collections::HashMap;

use termcolor::{Color, ColorSpec};

/// Environment variable holding the color specification.
pub const COLOR_ENV_VAR: &str = "LS_COLORS";

/// SGR attribute code that selects bold text.
const BOLD_CODE: u32 = 1;

/// Font weight of a styled name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
}

/// The fixed 8-color palette a rule can select from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl RuleColor {
    /// Map an SGR foreground code to a palette color.
    ///
    /// The bright-palette codes 91 and 94 alias to red and blue; every other
    /// unrecognized code falls back to white.
    pub fn from_code(code: u32) -> Self {
        match code {
            31 | 91 => RuleColor::Red,
            32 => RuleColor::Green,
            34 | 94 => RuleColor::Blue,
            35 => RuleColor::Magenta,
            36 => RuleColor::Cyan,
            37 => RuleColor::White,
            _ => RuleColor::White,
        }
    }

    pub fn to_termcolor(self) -> Color {
        match self {
            RuleColor::Black => Color::Black,
            RuleColor::Red => Color::Red,
            RuleColor::Green => Color::Green,
            RuleColor::Yellow => Color::Yellow,
            RuleColor::Blue => Color::Blue,
            RuleColor::Magenta => Color::Magenta,
            RuleColor::Cyan => Color::Cyan,
            RuleColor::White => Color::White,
        }
    }
}

/// A parsed `weight;color` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub weight: Weight,
    pub color: RuleColor,
}

impl StyleRule {
    pub fn new(weight: Weight, color: RuleColor) -> Self {
        Self { weight, color }
    }

    /// Build the termcolor spec used to paint a name with this rule.
    pub fn color_spec(&self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(self.color.to_termcolor()))
            .set_bold(self.weight == Weight::Bold);
        spec
    }
}

/// Lookup table from match key (`di`, `.rs`, ...) to style rule.
#[derive(Debug, Clone, Default)]
pub struct ColorRuleTable {
    rules: HashMap<String, StyleRule>,
}

impl ColorRuleTable {
    /// Parse a color specification. Malformed segments are skipped.
    pub fn parse(spec: &str) -> Self {
        let mut rules = HashMap::new();

        for segment in spec.split(':') {
            match parse_segment(segment) {
                Some((key, rule)) => {
                    // Later definitions replace earlier ones
                    rules.insert(key.to_string(), rule);
                }
                None => {
                    if !segment.is_empty() {
                        tracing::trace!(segment, "skipping malformed color rule");
                    }
                }
            }
        }

        tracing::debug!(rules = rules.len(), "parsed color rules");
        Self { rules }
    }

    /// Read and parse `LS_COLORS`. An unset variable yields an empty table.
    pub fn from_env() -> Self {
        match std::env::var(COLOR_ENV_VAR) {
            Ok(spec) => Self::parse(&spec),
            Err(_) => {
                tracing::debug!("{} not set, using default styles", COLOR_ENV_VAR);
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&StyleRule> {
        self.rules.get(key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Parse one `key=weight;color` segment.
fn parse_segment(segment: &str) -> Option<(&str, StyleRule)> {
    let mut parts = segment.split('=');
    let (key, value) = match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => (key, value),
        _ => return None,
    };

    let mut fields = value.split(';');
    let weight: u32 = fields.next()?.parse().ok()?;
    let color: u32 = fields.next()?.parse().ok()?;

    let weight = if weight == BOLD_CODE {
        Weight::Bold
    } else {
        Weight::Normal
    };
    let key = key.strip_prefix('*').unwrap_or(key);

    Some((key, StyleRule::new(weight, RuleColor::from_code(color))))
}
