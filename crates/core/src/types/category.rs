//! Product category enumeration.

use serde::{Deserialize, Serialize};

/// The fixed set of catalog categories.
///
/// Intent extraction works on raw synonym strings (which can include values
/// like "denim" that never canonicalize to a category); products themselves
/// always carry one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hoodies,
    Jeans,
    Trousers,
    Socks,
    Shoes,
    Tees,
    Shirts,
    Jackets,
}

impl Category {
    /// The canonical lowercase plural form, as used in filter comparisons.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hoodies => "hoodies",
            Self::Jeans => "jeans",
            Self::Trousers => "trousers",
            Self::Socks => "socks",
            Self::Shoes => "shoes",
            Self::Tees => "tees",
            Self::Shirts => "shirts",
            Self::Jackets => "jackets",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
