//! Product comparison handlers.
//!
//! Cards carry a "compare" toggle; the selection lives in the store and
//! survives cart activity, but any new search clears it. The comparison
//! panel needs at least two selected products to render a table.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use shopcommand_core::filter;

use crate::error::AppError;
use crate::state::AppState;
use crate::views::{CompareColumnView, ProductCardView, product_cards};

/// Minimum selection size for a meaningful comparison.
const MIN_COMPARE: usize = 2;

/// Compare toggle form data.
#[derive(Debug, Deserialize)]
pub struct CompareSelectForm {
    pub product_id: String,
}

/// Product grid fragment template (for HTMX), re-rendered after a compare
/// toggle so the card highlights follow the selection.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct GridTemplate {
    pub products: Vec<ProductCardView>,
    pub selected_count: usize,
}

/// Side-by-side comparison table fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/compare_panel.html")]
pub struct ComparePanelTemplate {
    pub columns: Vec<CompareColumnView>,
}

/// Inline notice fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/notice.html")]
pub struct NoticeTemplate {
    pub message: String,
}

/// Rebuild the grid fragment from the current store.
fn build_grid(state: &AppState) -> Result<GridTemplate, AppError> {
    let store = state.store()?;
    let catalog = state.catalog();
    let results = match &store.active_filters {
        Some(intent) => filter::apply(catalog, intent),
        None => catalog.iter().collect(),
    };
    Ok(GridTemplate {
        products: product_cards(&results, &store.selected),
        selected_count: store.selected.len(),
    })
}

/// Toggle a product in the comparison selection (HTMX). Returns the grid
/// fragment so the toggled card re-renders in its new state.
#[instrument(skip(state))]
pub async fn select(
    State(state): State<AppState>,
    Form(form): Form<CompareSelectForm>,
) -> Result<GridTemplate, AppError> {
    let id = state
        .product(&form.product_id)
        .map(|p| p.id.clone())
        .ok_or_else(|| AppError::BadRequest(format!("unknown product: {}", form.product_id)))?;

    state.update_store(|s| s.toggle_selection(&id))?;
    build_grid(&state)
}

/// Render the comparison panel (HTMX). Fewer than two selections yields a
/// notice instead of a table.
#[instrument(skip(state))]
pub async fn panel(State(state): State<AppState>) -> Result<Response, AppError> {
    let store = state.store()?;

    if store.selected.len() < MIN_COMPARE {
        return Ok(NoticeTemplate {
            message: "Select at least 2 products to compare".to_string(),
        }
        .into_response());
    }

    let columns = store
        .selected
        .iter()
        .filter_map(|id| state.product(id.as_str()))
        .map(CompareColumnView::new)
        .collect();

    Ok(ComparePanelTemplate { columns }.into_response())
}
