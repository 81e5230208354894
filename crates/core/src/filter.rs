//! Intent-driven catalog filtering.
//!
//! [`apply`] is a pure, deterministic pipeline of cumulative AND stages.
//! It never mutates the catalog; it only produces a derived subsequence of
//! references. An intent with no filter fields set is the identity filter.

use std::cmp::Reverse;

use crate::intent::{Intent, Sentiment};
use crate::types::{Gender, Product};

/// Synonym to canonical category map used at filter time. Values not listed
/// here pass through unchanged, so an intent category like "denim" compares
/// against the catalog verbatim (and matches nothing).
const CANONICAL_CATEGORIES: &[(&str, &str)] = &[
    ("hoodie", "hoodies"),
    ("jeans", "jeans"),
    ("trouser", "trousers"),
    ("sock", "socks"),
    ("shoe", "shoes"),
    ("tee", "tees"),
    ("shirt", "shirts"),
    ("jacket", "jackets"),
];

/// Resolve an intent category token to its canonical catalog form.
#[must_use]
pub fn canonical_category(category: &str) -> &str {
    CANONICAL_CATEGORIES
        .iter()
        .find(|(synonym, _)| *synonym == category)
        .map_or(category, |(_, canonical)| canonical)
}

/// Apply an intent to the product collection.
///
/// Stages run in fixed order (category, gender, color, price, sentiment
/// sort); each stage only runs when the corresponding intent field is set.
/// The sentiment sort is stable, so equal prices keep catalog order.
#[must_use]
pub fn apply<'a>(products: &'a [Product], intent: &Intent) -> Vec<&'a Product> {
    let mut results: Vec<&Product> = products.iter().collect();

    if let Some(category) = &intent.category {
        let canonical = canonical_category(category);
        results.retain(|p| p.category.as_str() == canonical);
    }

    if let Some(gender) = intent.gender {
        results.retain(|p| p.gender == gender || p.gender == Gender::Unisex);
    }

    if !intent.colors.is_empty() {
        results.retain(|p| {
            intent.colors.iter().any(|c| {
                p.color.eq_ignore_ascii_case(c)
                    || p.colors.iter().any(|pc| pc.eq_ignore_ascii_case(c))
            })
        });
    }

    if let Some(max_price) = intent.max_price {
        results.retain(|p| p.price <= max_price);
    }
    if let Some(min_price) = intent.min_price {
        results.retain(|p| p.price >= min_price);
    }

    match intent.sentiment {
        Some(Sentiment::Cheaper) => results.sort_by_key(|p| p.price),
        Some(Sentiment::Expensive) => results.sort_by_key(|p| Reverse(p.price)),
        _ => {}
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::types::{Category, Price};

    #[test]
    fn test_empty_intent_is_identity() {
        let products = catalog::seed();
        let results = apply(&products, &Intent::default());
        assert_eq!(results.len(), products.len());
        for (result, product) in results.iter().zip(products.iter()) {
            assert_eq!(*result, product);
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let products = catalog::seed();
        let intent = Intent::parse("black hoodies under 2000");

        let once: Vec<Product> = apply(&products, &intent).into_iter().cloned().collect();
        let twice: Vec<Product> = apply(&once, &intent).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_canonicalization() {
        assert_eq!(canonical_category("hoodie"), "hoodies");
        assert_eq!(canonical_category("shoe"), "shoes");
        // Unknown tokens pass through unchanged.
        assert_eq!(canonical_category("denim"), "denim");
    }

    #[test]
    fn test_cheaper_tees_returns_only_tees_ascending() {
        let products = catalog::seed();
        let intent = Intent::parse("cheaper tees");
        let results = apply(&products, &intent);

        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.category == Category::Tees));
        assert!(results.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn test_expensive_sorts_descending() {
        let products = catalog::seed();
        let intent = Intent::parse("premium shirts");
        let results = apply(&products, &intent);

        assert!(!results.is_empty());
        assert!(results.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn test_gender_filter_includes_unisex() {
        let products = catalog::seed();
        let intent = Intent::parse("tees for women");
        let results = apply(&products, &intent);

        assert!(!results.is_empty());
        assert!(
            results
                .iter()
                .all(|p| p.gender == Gender::Women || p.gender == Gender::Unisex)
        );
    }

    #[test]
    fn test_color_filter_matches_any_listed_color() {
        let products = catalog::seed();
        let intent = Intent::parse("maroon hoodies");
        let results = apply(&products, &intent);

        // The oversized fleece hoodie is Gray primary but lists Maroon.
        assert!(results.iter().any(|p| p.id.as_str() == "oversized-fleece-hoodie"));
    }

    #[test]
    fn test_price_ceiling() {
        let products = catalog::seed();
        let intent = Intent::parse("hoodies under 2000");
        let results = apply(&products, &intent);

        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.price <= Price::from_major(2000)));
    }

    #[test]
    fn test_white_sneakers_for_women() {
        let products = catalog::seed();
        let intent = Intent::parse("white sneakers for women");
        let results = apply(&products, &intent);

        assert_eq!(results.len(), 1);
        assert_eq!(results.first().map(|p| p.id.as_str()), Some("court-white-sneakers"));
    }

    #[test]
    fn test_unmapped_category_yields_empty_set() {
        // "denim" is in the synonym list but has no canonical category.
        let products = catalog::seed();
        let intent = Intent::parse("denim");
        assert!(apply(&products, &intent).is_empty());
    }

    #[test]
    fn test_min_price_honored_when_set_externally() {
        let products = catalog::seed();
        let intent = Intent {
            min_price: Some(Price::from_major(4000)),
            ..Intent::default()
        };
        let results = apply(&products, &intent);
        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.price >= Price::from_major(4000)));
    }
}
