//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the shared [`Store`](shopcommand_core::store::Store)
//! and every handler is one reducer application.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use shopcommand_core::ProductId;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;
use crate::views::CartView;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Checkout summary page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/checkout.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
}

/// Resolve a form-submitted product id against the catalog.
fn known_product_id(state: &AppState, id: &str) -> Result<ProductId, AppError> {
    state
        .product(id)
        .map(|p| p.id.clone())
        .ok_or_else(|| AppError::BadRequest(format!("unknown product: {id}")))
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<CartShowTemplate, AppError> {
    let store = state.store()?;
    Ok(CartShowTemplate {
        cart: CartView::build(&store, state.catalog()),
    })
}

/// Add one unit of a product to the cart (HTMX).
///
/// Returns the cart count badge with an HTMX trigger so other cart
/// elements on the page refresh themselves.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let id = known_product_id(&state, &form.product_id)?;
    let store = state.update_store(|s| s.add_to_cart(&id))?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: store.cart_count(),
        },
    )
        .into_response())
}

/// Update a cart line's quantity (HTMX). Quantity zero removes the line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response, AppError> {
    let id = known_product_id(&state, &form.product_id)?;
    let store = state.update_store(|s| s.set_quantity(&id, form.quantity))?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::build(&store, state.catalog()),
        },
    )
        .into_response())
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response, AppError> {
    let id = known_product_id(&state, &form.product_id)?;
    let store = state.update_store(|s| s.remove_line(&id))?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::build(&store, state.catalog()),
        },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Result<CartCountTemplate, AppError> {
    let store = state.store()?;
    Ok(CartCountTemplate {
        count: store.cart_count(),
    })
}

/// Checkout summary. There is no payment backend; an empty cart bounces
/// back to the cart page.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Response, AppError> {
    let store = state.store()?;
    let cart = CartView::build(&store, state.catalog());
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }
    Ok(CheckoutTemplate { cart }.into_response())
}
