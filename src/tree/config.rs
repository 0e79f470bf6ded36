//! Configuration types for tree walking

/// Remaining recursion levels for a render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    #[default]
    Unlimited,
    Limited(u8),
}

impl Depth {
    /// A budget of zero lists nothing.
    pub fn is_exhausted(self) -> bool {
        self == Depth::Limited(0)
    }

    /// Budget for the next level down.
    pub fn descend(self) -> Self {
        match self {
            Depth::Unlimited => Depth::Unlimited,
            Depth::Limited(n) => Depth::Limited(n.saturating_sub(1)),
        }
    }
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Descend at most this many levels (`-L`). `None` is unlimited.
    pub max_depth: Option<u8>,
}

impl WalkerConfig {
    /// Depth budget for the root call.
    pub fn depth(&self) -> Depth {
        self.max_depth.map_or(Depth::Unlimited, Depth::Limited)
    }
}
