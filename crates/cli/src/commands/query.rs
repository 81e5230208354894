//! Query inspection commands.
//!
//! Both commands run the same intent parser the storefront uses, so the
//! CLI is the quickest way to see what a query resolves to.

use shopcommand_core::intent::Intent;
use shopcommand_core::{catalog, filter};
use thiserror::Error;

/// Errors that can occur while printing query output.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Intent serialization failed.
    #[error("Failed to serialize intent: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Parse a query, filter the seeded catalog and print the results as a
/// table.
pub fn run(text: &str) -> Result<(), QueryError> {
    let intent = Intent::parse(text);
    let catalog = catalog::seed();
    let results = filter::apply(&catalog, &intent);

    println!("query:   {text}");
    println!("intent:  {}", serde_json::to_string(&intent)?);
    println!("matches: {}", results.len());
    println!();

    if results.is_empty() {
        println!("no products match");
        return Ok(());
    }

    println!(
        "{:<28} {:<10} {:<8} {:>10}  {}",
        "ID", "CATEGORY", "GENDER", "PRICE", "COLOR"
    );
    for product in results {
        println!(
            "{:<28} {:<10} {:<8} {:>10}  {}",
            product.id,
            product.category,
            product.gender,
            product.price.display(),
            product.color,
        );
    }

    Ok(())
}

/// Parse a query and print the structured intent as JSON (pretty by
/// default).
pub fn intent(text: &str, compact: bool) -> Result<(), QueryError> {
    let intent = Intent::parse(text);
    let json = if compact {
        serde_json::to_string(&intent)?
    } else {
        serde_json::to_string_pretty(&intent)?
    };
    println!("{json}");
    Ok(())
}
