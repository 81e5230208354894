//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page (command bar, chips, product grid)
//! GET  /health          - Health check
//!
//! # Search & filters
//! GET  /search?q=...    - Run a natural-language query
//! POST /filters/remove  - Remove one active filter chip
//! POST /filters/clear   - Clear all active filters
//!
//! # Cart (HTMX fragments)
//! GET  /cart            - Cart page
//! POST /cart/add        - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/update     - Update quantity (returns cart_items fragment)
//! POST /cart/remove     - Remove line (returns cart_items fragment)
//! GET  /cart/count      - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout        - Checkout summary (no payment backend)
//!
//! # Compare (HTMX fragments)
//! POST /compare/select  - Toggle a product in the comparison selection
//! GET  /compare         - Comparison panel (table, or notice if < 2 selected)
//! ```

pub mod cart;
pub mod compare;
pub mod home;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the search and filter routes router.
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search))
        .route("/filters/remove", post(search::remove_chip))
        .route("/filters/clear", post(search::clear_filters))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the comparison routes router.
pub fn compare_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(compare::panel))
        .route("/select", post(compare::select))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .merge(search_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", get(cart::checkout))
        .nest("/compare", compare_routes())
}
