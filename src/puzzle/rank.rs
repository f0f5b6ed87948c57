//! Player rank by level

use std::fmt;

/// Title shown for a level number
///
/// Levels are 1-based; level 0 is treated like level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Levels 1-3
    Deckhand,
    /// Levels 4-7
    Sailor,
    /// Level 8 onwards
    Captain,
}

impl Rank {
    #[must_use]
    pub const fn for_level(level: u32) -> Self {
        match level {
            0..=3 => Self::Deckhand,
            4..=7 => Self::Sailor,
            _ => Self::Captain,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Deckhand => "Deckhand",
            Self::Sailor => "Sailor",
            Self::Captain => "Captain",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
