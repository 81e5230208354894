//! Free-text query to structured intent extraction.
//!
//! [`Intent::parse`] is a total function: any input, including the empty
//! string or pure punctuation, yields a well-formed intent. Unrecognized
//! text simply leaves the filter fields unset. Each field is computed
//! independently by case-insensitive substring containment against a fixed
//! vocabulary, first match wins within a field.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::color::{COLOR_KEYWORDS, capitalize};
use crate::types::{Gender, Price, ProductId};

/// What the shopper is trying to do with the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Search,
    Filter,
    Compare,
    Refine,
    Browse,
}

/// Coarse qualitative signal extracted from phrasing.
///
/// Only `Cheaper`/`Expensive` affect anything downstream (they choose the
/// price sort order); `Casual`/`Formal` are carried for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Cheaper,
    Expensive,
    Casual,
    Formal,
}

/// Structured representation of a shopper's free-text query.
///
/// Derived and ephemeral: recomputed per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Intent {
    pub action: Action,
    /// Singular-stripped, alias-remapped category token. Kept as a string
    /// because the synonym list includes values ("denim", "leather",
    /// "blouse") that never canonicalize to a catalog category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Order-preserving, may repeat if the input repeats; capitalized.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub colors: Vec<String>,
    /// Never set by the extractor; reserved for an external override path
    /// (a future "between X and Y" phrase would populate it).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    /// Residual tokens for display; never used for filtering.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub compare_ids: Vec<ProductId>,
}

/// Category synonyms in scan order. First containment match wins, so the
/// list order is the tie-break (e.g. "jacket" beats "leather" for
/// "leather jacket").
const CATEGORY_SYNONYMS: &[&str] = &[
    "hoodie", "hoodies", "jeans", "trouser", "trousers", "sock", "socks", "shoe", "shoes",
    "sneaker", "sneakers", "boot", "boots", "tee", "tees", "t-shirt", "shirt", "shirts", "blouse",
    "jacket", "jackets", "denim", "leather",
];

/// Tokens dropped from residual keywords.
const STOP_WORDS: &[&str] = &[
    "show",
    "find",
    "for",
    "that",
    "something",
    "want",
    "me",
    "the",
    "this",
];

/// Matches "under <digits>" or the first bare run of digits (with an
/// optional trailing currency marker). Note the bare-number branch will
/// happily capture a size like "32" as a price ceiling; that behavior is
/// intentional (see DESIGN.md).
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"under\s+(\d+)|(\d+)\s*(?:rs|₹)?").expect("price pattern is a valid regex")
});

impl Intent {
    /// Extract a structured intent from raw query text.
    ///
    /// Total: never fails. Unmatched fields stay unset and the action
    /// defaults to [`Action::Search`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let lower = input.to_lowercase().trim().to_string();

        let mut intent = Self::default();

        // Action classification, fixed priority: compare > find/show > refine.
        if lower.contains("compare") {
            intent.action = Action::Compare;
        } else if lower.contains("find") || lower.contains("show") {
            intent.action = Action::Search;
        } else if lower.contains("cheaper")
            || lower.contains("more expensive")
            || lower.contains("premium")
        {
            intent.action = Action::Refine;
        }

        intent.category = extract_category(&lower);

        // Gender: the women check MUST run first because "women" textually
        // contains "men".
        if lower.contains("women") {
            intent.gender = Some(Gender::Women);
        } else if lower.contains("men") {
            intent.gender = Some(Gender::Men);
        }

        // Colors are multi-match: every contained keyword contributes.
        intent.colors = COLOR_KEYWORDS
            .iter()
            .filter(|color| lower.contains(**color))
            .map(|color| capitalize(color))
            .collect();

        intent.max_price = extract_max_price(&lower);

        // Sentiment: mutually exclusive ordered checks.
        if lower.contains("cheaper") {
            intent.sentiment = Some(Sentiment::Cheaper);
        } else if lower.contains("expensive") || lower.contains("premium") {
            intent.sentiment = Some(Sentiment::Expensive);
        } else if lower.contains("casual") || lower.contains("college") {
            intent.sentiment = Some(Sentiment::Casual);
        } else if lower.contains("formal") {
            intent.sentiment = Some(Sentiment::Formal);
        }

        intent.keywords = lower
            .split_whitespace()
            .filter(|w| w.len() > 3 && !STOP_WORDS.contains(w))
            .map(ToString::to_string)
            .collect();

        intent
    }

    /// Whether any filter field is set. An intent without filters is the
    /// identity filter: applying it returns the catalog unchanged.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.category.is_some()
            || self.gender.is_some()
            || !self.colors.is_empty()
            || self.min_price.is_some()
            || self.max_price.is_some()
    }
}

/// Scan the synonym list, strip one trailing "s", remap fixed aliases.
fn extract_category(lower: &str) -> Option<String> {
    let synonym = CATEGORY_SYNONYMS.iter().find(|s| lower.contains(**s))?;
    let singular = synonym.strip_suffix('s').unwrap_or(synonym);
    let remapped = match singular {
        "sneaker" | "boot" => "shoes",
        "t-shirt" => "tees",
        "sock" => "socks",
        "trouser" => "trousers",
        other => other,
    };
    Some(remapped.to_string())
}

/// First "under N" or bare-number match becomes the price ceiling; the
/// captured number is whole rupees. Digit runs too long for i64, or whose
/// minor-unit value would overflow, are ignored.
fn extract_max_price(lower: &str) -> Option<Price> {
    let captures = PRICE_RE.captures(lower)?;
    let digits = captures.get(1).or_else(|| captures.get(2))?;
    let major = digits.as_str().parse::<i64>().ok()?;
    Price::checked_from_major(major)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input_is_default_search() {
        let intent = Intent::parse("");
        assert_eq!(intent.action, Action::Search);
        assert_eq!(intent.category, None);
        assert_eq!(intent.gender, None);
        assert!(intent.colors.is_empty());
        assert_eq!(intent.max_price, None);
        assert_eq!(intent.sentiment, None);
        assert!(intent.keywords.is_empty());
        assert!(!intent.has_filters());
    }

    #[test]
    fn test_parse_symbols_only_is_total() {
        let intent = Intent::parse("!!! @@@ ###");
        assert_eq!(intent.action, Action::Search);
        assert!(!intent.has_filters());
    }

    #[test]
    fn test_parse_black_hoodies_under_2000() {
        let intent = Intent::parse("show me black oversized hoodies under 2000");
        assert_eq!(intent.action, Action::Search);
        assert_eq!(intent.category.as_deref(), Some("hoodie"));
        assert_eq!(intent.colors, vec!["Black"]);
        assert_eq!(intent.max_price, Some(Price::from_major(2000)));
    }

    #[test]
    fn test_parse_white_sneakers_for_women() {
        let intent = Intent::parse("white sneakers for women");
        assert_eq!(intent.category.as_deref(), Some("shoes"));
        assert_eq!(intent.gender, Some(Gender::Women));
        assert_eq!(intent.colors, vec!["White"]);
    }

    #[test]
    fn test_parse_mens_leather_jacket() {
        let intent = Intent::parse("mens leather jacket");
        assert_eq!(intent.gender, Some(Gender::Men));
        // "jacket" precedes "leather" in the synonym scan order.
        assert_eq!(intent.category.as_deref(), Some("jacket"));
    }

    #[test]
    fn test_parse_cheaper_tees() {
        let intent = Intent::parse("cheaper tees");
        assert_eq!(intent.action, Action::Refine);
        assert_eq!(intent.category.as_deref(), Some("tee"));
        assert_eq!(intent.sentiment, Some(Sentiment::Cheaper));
    }

    #[test]
    fn test_women_is_never_classified_as_men() {
        // Regression test for the substring overlap: "women" contains "men".
        for query in ["women", "womens shoes", "tees for women"] {
            assert_eq!(Intent::parse(query).gender, Some(Gender::Women), "{query}");
        }
    }

    #[test]
    fn test_compare_action_takes_priority_over_show() {
        let intent = Intent::parse("compare and show me jackets");
        assert_eq!(intent.action, Action::Compare);
    }

    #[test]
    fn test_premium_sets_refine_and_expensive() {
        let intent = Intent::parse("premium shirts");
        assert_eq!(intent.action, Action::Refine);
        assert_eq!(intent.sentiment, Some(Sentiment::Expensive));
    }

    #[test]
    fn test_college_maps_to_casual() {
        let intent = Intent::parse("college tees");
        assert_eq!(intent.sentiment, Some(Sentiment::Casual));
    }

    #[test]
    fn test_multiple_colors_all_collected() {
        let intent = Intent::parse("black and white sneakers");
        assert_eq!(intent.colors, vec!["Black", "White"]);
    }

    #[test]
    fn test_bare_number_is_parsed_as_price_ceiling() {
        // Preserved quirk: any digit run becomes max_price, even a size.
        let intent = Intent::parse("jeans size 32");
        assert_eq!(intent.max_price, Some(Price::from_major(32)));
    }

    #[test]
    fn test_under_phrase_wins_when_first() {
        let intent = Intent::parse("hoodies under 1500 rs");
        assert_eq!(intent.max_price, Some(Price::from_major(1500)));
    }

    #[test]
    fn test_oversized_price_numbers_are_ignored() {
        // Parses as i64 but overflows the minor-unit conversion; the
        // extractor stays total and just drops the ceiling.
        let intent = Intent::parse("hoodies under 400000000000000000");
        assert_eq!(intent.max_price, None);

        // Too long to parse as i64 at all.
        let intent = Intent::parse("hoodies under 99999999999999999999999");
        assert_eq!(intent.max_price, None);
    }

    #[test]
    fn test_min_price_is_never_extracted() {
        let intent = Intent::parse("hoodies over 500 under 2000");
        assert_eq!(intent.min_price, None);
    }

    #[test]
    fn test_keywords_drop_stop_words_and_short_tokens() {
        let intent = Intent::parse("show me something casual for the college crowd");
        assert_eq!(intent.keywords, vec!["casual", "college", "crowd"]);
    }

    #[test]
    fn test_boot_synonym_remaps_to_shoes() {
        assert_eq!(Intent::parse("boots").category.as_deref(), Some("shoes"));
        assert_eq!(Intent::parse("boot").category.as_deref(), Some("shoes"));
    }

    #[test]
    fn test_tshirt_synonym_remaps_to_tees() {
        // "t-shirt" is scanned before "shirt", so the alias wins.
        assert_eq!(Intent::parse("t-shirt").category.as_deref(), Some("tees"));
    }

    #[test]
    fn test_jeans_strips_to_jean() {
        // Preserved quirk: the trailing-s strip produces "jean", which has
        // no canonical catalog category and therefore filters to nothing.
        assert_eq!(Intent::parse("find casual jeans").category.as_deref(), Some("jean"));
    }
}
