//! Display data for templates.
//!
//! View structs are plain owned data derived from the catalog and the
//! current store snapshot. Templates never see domain types directly.

use shopcommand_core::intent::Intent;
use shopcommand_core::store::Store;
use shopcommand_core::types::color::color_hex;
use shopcommand_core::{Product, ProductId};

/// How many sizes a product card shows before collapsing to "+N more".
const SIZES_SHOWN: usize = 4;

/// A color swatch on a product card.
#[derive(Clone)]
pub struct SwatchView {
    pub name: String,
    pub hex: &'static str,
}

/// Product display data for the grid and comparison views.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Empty for unisex products (no tag shown).
    pub gender_tag: String,
    pub price: String,
    pub swatches: Vec<SwatchView>,
    pub sizes: Vec<String>,
    pub extra_sizes: usize,
    pub stock: u32,
    pub low_stock: bool,
    pub out_of_stock: bool,
    pub selected: bool,
    pub image: String,
}

impl ProductCardView {
    #[must_use]
    pub fn new(product: &Product, selected: bool) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.to_string(),
            gender_tag: match product.gender {
                shopcommand_core::Gender::Unisex => String::new(),
                other => other.to_string(),
            },
            price: product.price.display(),
            swatches: product
                .colors
                .iter()
                .map(|c| SwatchView {
                    name: c.clone(),
                    hex: color_hex(c),
                })
                .collect(),
            sizes: product.sizes.iter().take(SIZES_SHOWN).cloned().collect(),
            extra_sizes: product.sizes.len().saturating_sub(SIZES_SHOWN),
            stock: product.stock,
            low_stock: product.is_low_stock(),
            out_of_stock: product.is_out_of_stock(),
            selected,
            image: product.image.clone(),
        }
    }
}

/// Build the grid cards for a filtered result set, marking the comparison
/// selection.
#[must_use]
pub fn product_cards(results: &[&Product], selected: &[ProductId]) -> Vec<ProductCardView> {
    results
        .iter()
        .map(|p| ProductCardView::new(p, selected.contains(&p.id)))
        .collect()
}

/// A removable active-filter chip.
#[derive(Clone)]
pub struct ChipView {
    pub label: String,
    /// Form discriminator: "category", "gender", "color" or "max-price".
    pub kind: &'static str,
    /// Only meaningful for color chips (the color to remove).
    pub value: String,
}

/// Chips for the active filters, in display order: category, gender,
/// colors (one chip each), price ceiling.
#[must_use]
pub fn filter_chips(intent: &Intent) -> Vec<ChipView> {
    let mut chips = Vec::new();
    if let Some(category) = &intent.category {
        chips.push(ChipView {
            label: category.clone(),
            kind: "category",
            value: String::new(),
        });
    }
    if let Some(gender) = intent.gender {
        chips.push(ChipView {
            label: gender.to_string(),
            kind: "gender",
            value: String::new(),
        });
    }
    for color in &intent.colors {
        chips.push(ChipView {
            label: color.clone(),
            kind: "color",
            value: color.clone(),
        });
    }
    if let Some(max_price) = intent.max_price {
        chips.push(ChipView {
            label: max_price.display(),
            kind: "max-price",
            value: String::new(),
        });
    }
    chips
}

/// A cart line for display.
#[derive(Clone)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub count: u32,
}

impl CartView {
    /// Build the cart view from the store, pricing lines against the
    /// catalog. Lines whose product vanished from the catalog are skipped.
    #[must_use]
    pub fn build(store: &Store, catalog: &[Product]) -> Self {
        let lines = store
            .cart
            .iter()
            .filter_map(|line| {
                catalog.iter().find(|p| p.id == line.product).map(|p| {
                    let line_total = shopcommand_core::Price::from_minor(
                        p.price.as_minor() * i64::from(line.quantity),
                    );
                    CartLineView {
                        id: p.id.to_string(),
                        name: p.name.clone(),
                        unit_price: p.price.display(),
                        quantity: line.quantity,
                        line_total: line_total.display(),
                    }
                })
            })
            .collect();

        Self {
            lines,
            subtotal: store.cart_subtotal(catalog).display(),
            count: store.cart_count(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One column of the side-by-side comparison table.
#[derive(Clone)]
pub struct CompareColumnView {
    pub name: String,
    pub category: String,
    pub gender: String,
    pub price: String,
    pub colors: String,
    pub sizes: String,
    pub stock: u32,
}

impl CompareColumnView {
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.to_string(),
            gender: product.gender.to_string(),
            price: product.price.display(),
            colors: product.colors.join(", "),
            sizes: product.sizes.join(", "),
            stock: product.stock,
        }
    }
}
