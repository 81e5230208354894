//! Type-safe price representation.
//!
//! Prices are stored as an integer amount in the smallest currency unit
//! (paise). Display formatting goes through decimal arithmetic so the
//! rendered value is the whole-rupee amount shoppers see on tags.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in the smallest currency unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from an amount in the smallest currency unit (paise).
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a price from an amount in whole currency units (rupees).
    ///
    /// Numbers captured from query text ("under 2000") are whole rupees and
    /// cross into minor units here, at the type boundary.
    #[must_use]
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Like [`Price::from_major`], but `None` when the minor-unit amount
    /// would overflow `i64`. Untrusted amounts (query text) come through
    /// here.
    #[must_use]
    pub const fn checked_from_major(major: i64) -> Option<Self> {
        match major.checked_mul(100) {
            Some(minor) => Some(Self(minor)),
            None => None,
        }
    }

    /// Get the amount in the smallest currency unit.
    #[must_use]
    pub const fn as_minor(self) -> i64 {
        self.0
    }

    /// Format for display as whole rupees (e.g., "₹1499").
    #[must_use]
    pub fn display(self) -> String {
        format!("₹{:.0}", Decimal::new(self.0, 2))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_is_minor_times_hundred() {
        assert_eq!(Price::from_major(2000).as_minor(), 200_000);
    }

    #[test]
    fn test_display_rounds_to_whole_rupees() {
        assert_eq!(Price::from_minor(149_900).display(), "₹1499");
        assert_eq!(Price::from_minor(149_950).display(), "₹1500");
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_major(699) < Price::from_major(899));
    }

    #[test]
    fn test_checked_from_major_rejects_overflow() {
        assert_eq!(
            Price::checked_from_major(1499),
            Some(Price::from_major(1499))
        );
        assert_eq!(Price::checked_from_major(i64::MAX / 100 + 1), None);
    }
}
