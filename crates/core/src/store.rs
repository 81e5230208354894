//! Immutable view state and pure reducers.
//!
//! The UI never holds mutable widget state. All view state lives in a
//! [`Store`] value owned by the application shell (the web `AppState` or the
//! CLI); every user action maps to a reducer that consumes the current store
//! and returns the next one. Views below the shell are read-only.

use serde::{Deserialize, Serialize};

use crate::intent::Intent;
use crate::types::{Price, Product, ProductId};

/// A line in the shopper's cart. Quantity is always >= 1; the line is
/// removed when quantity would drop to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: ProductId,
    pub quantity: u32,
}

/// A removable chip shown for one active filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChip {
    Category,
    Gender,
    Color(String),
    MaxPrice,
}

/// The complete view state: cart, comparison selection, active filters and
/// the last submitted query. Plain value semantics; reducers take `self` by
/// value and return the next store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Store {
    pub cart: Vec<CartLine>,
    pub selected: Vec<ProductId>,
    pub active_filters: Option<Intent>,
    pub last_query: String,
}

impl Store {
    /// Record a submitted search: remember the query, install the parsed
    /// intent as the active filters and clear the comparison selection.
    #[must_use]
    pub fn submit_search(mut self, query: &str, intent: Intent) -> Self {
        self.last_query = query.to_string();
        self.active_filters = Some(intent);
        self.selected.clear();
        self
    }

    /// Drop all active filters, the remembered query and the selection.
    #[must_use]
    pub fn clear_filters(mut self) -> Self {
        self.active_filters = None;
        self.last_query.clear();
        self.selected.clear();
        self
    }

    /// Remove a single filter chip. When the last chip goes, the active
    /// filters drop entirely (back to the unfiltered grid).
    #[must_use]
    pub fn remove_filter_chip(mut self, chip: &FilterChip) -> Self {
        if let Some(filters) = self.active_filters.as_mut() {
            match chip {
                FilterChip::Category => filters.category = None,
                FilterChip::Gender => filters.gender = None,
                FilterChip::Color(color) => {
                    if let Some(pos) = filters.colors.iter().position(|c| c == color) {
                        filters.colors.remove(pos);
                    }
                }
                FilterChip::MaxPrice => filters.max_price = None,
            }
            if !filters.has_filters() {
                self.active_filters = None;
                self.last_query.clear();
            }
        }
        self
    }

    /// Toggle a product in the comparison selection.
    #[must_use]
    pub fn toggle_selection(mut self, id: &ProductId) -> Self {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.clone());
        }
        self
    }

    /// Add one unit of a product: bump the existing line or append a new
    /// line with quantity 1.
    #[must_use]
    pub fn add_to_cart(mut self, id: &ProductId) -> Self {
        if let Some(line) = self.cart.iter_mut().find(|l| &l.product == id) {
            line.quantity += 1;
        } else {
            self.cart.push(CartLine {
                product: id.clone(),
                quantity: 1,
            });
        }
        self
    }

    /// Set a line's quantity; zero removes the line. Unknown ids are a
    /// no-op.
    #[must_use]
    pub fn set_quantity(mut self, id: &ProductId, quantity: u32) -> Self {
        if quantity == 0 {
            self.cart.retain(|l| &l.product != id);
        } else if let Some(line) = self.cart.iter_mut().find(|l| &l.product == id) {
            line.quantity = quantity;
        }
        self
    }

    /// Remove a line from the cart entirely.
    #[must_use]
    pub fn remove_line(mut self, id: &ProductId) -> Self {
        self.cart.retain(|l| &l.product != id);
        self
    }

    /// Total number of units in the cart.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|l| l.quantity).sum()
    }

    /// Cart subtotal priced against the catalog. Lines whose product is
    /// missing from the catalog contribute nothing.
    #[must_use]
    pub fn cart_subtotal(&self, catalog: &[Product]) -> Price {
        let minor = self
            .cart
            .iter()
            .filter_map(|line| {
                catalog
                    .iter()
                    .find(|p| p.id == line.product)
                    .map(|p| p.price.as_minor() * i64::from(line.quantity))
            })
            .sum();
        Price::from_minor(minor)
    }

    /// Number of chips to render: category and gender count one each, every
    /// color counts individually, the price ceiling counts one.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.active_filters.as_ref().map_or(0, |f| {
            usize::from(f.category.is_some())
                + usize::from(f.gender.is_some())
                + f.colors.len()
                + usize::from(f.max_price.is_some())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_add_to_cart_increments_existing_line() {
        let store = Store::default()
            .add_to_cart(&id("essential-cotton-tee"))
            .add_to_cart(&id("essential-cotton-tee"));
        assert_eq!(store.cart.len(), 1);
        assert_eq!(store.cart_count(), 2);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let store = Store::default()
            .add_to_cart(&id("crew-socks-3-pack"))
            .set_quantity(&id("crew-socks-3-pack"), 0);
        assert!(store.cart.is_empty());
    }

    #[test]
    fn test_toggle_selection_twice_is_noop() {
        let store = Store::default()
            .toggle_selection(&id("chelsea-boots"))
            .toggle_selection(&id("chelsea-boots"));
        assert_eq!(store, Store::default());
    }

    #[test]
    fn test_submit_search_clears_selection() {
        let store = Store::default()
            .toggle_selection(&id("chelsea-boots"))
            .submit_search("black hoodies", Intent::parse("black hoodies"));
        assert!(store.selected.is_empty());
        assert_eq!(store.last_query, "black hoodies");
        assert_eq!(store.active_filter_count(), 2);
    }

    #[test]
    fn test_remove_last_chip_drops_filters() {
        let store = Store::default()
            .submit_search("black tees", Intent::parse("black tees"))
            .remove_filter_chip(&FilterChip::Color("Black".to_string()))
            .remove_filter_chip(&FilterChip::Category);
        assert_eq!(store.active_filters, None);
        assert!(store.last_query.is_empty());
    }

    #[test]
    fn test_cart_subtotal_prices_against_catalog() {
        let catalog = catalog::seed();
        let store = Store::default()
            .add_to_cart(&id("essential-cotton-tee"))
            .add_to_cart(&id("essential-cotton-tee"))
            .add_to_cart(&id("crew-socks-3-pack"));
        // 2 x 699 + 399 = 1797 rupees
        assert_eq!(store.cart_subtotal(&catalog), Price::from_major(1797));
    }

    #[test]
    fn test_cart_subtotal_skips_unknown_products() {
        let catalog = catalog::seed();
        let store = Store::default().add_to_cart(&id("no-such-product"));
        assert_eq!(store.cart_subtotal(&catalog), Price::from_minor(0));
    }
}
