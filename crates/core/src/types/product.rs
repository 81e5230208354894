//! The catalog product record.

use serde::{Deserialize, Serialize};

use super::{Category, Gender, Price, ProductId};

/// An immutable catalog entry, created at process start and never mutated.
///
/// Filtering only ever produces derived subsequences of the catalog; nothing
/// writes back into these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub gender: Gender,
    pub price: Price,
    /// Primary display color.
    pub color: String,
    /// All available colors, primary included.
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub stock: u32,
    /// Static image reference under `/static/images/products/`.
    pub image: String,
}

impl Product {
    /// Low-stock badge threshold used by product cards.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock < 10
    }

    #[must_use]
    pub const fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}
