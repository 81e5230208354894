//! Natural-language search and filter-chip handlers.
//!
//! A submitted query is parsed into an [`Intent`] and installed as the
//! active filters in one reducer step. Chip removal and "clear all" mutate
//! the same filters and land back on the home page.

use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use shopcommand_core::intent::Intent;
use shopcommand_core::store::FilterChip;

use crate::error::AppError;
use crate::routes::home::build_home;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Chip removal form data. `value` is only set for color chips.
#[derive(Debug, Deserialize)]
pub struct RemoveChipForm {
    pub kind: String,
    #[serde(default)]
    pub value: String,
}

/// Run a natural-language search and render the filtered grid.
///
/// An empty query is a no-op redirect back home; everything else goes
/// through the intent parser, which never fails.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let query = params.q.trim();
    if query.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }

    let intent = Intent::parse(query);
    tracing::info!(query, ?intent, "parsed search intent");
    state.update_store(|s| s.submit_search(query, intent))?;

    Ok(build_home(&state)?.into_response())
}

/// Remove one active filter chip, then redirect back to the grid.
#[instrument(skip(state))]
pub async fn remove_chip(
    State(state): State<AppState>,
    Form(form): Form<RemoveChipForm>,
) -> Result<Redirect, AppError> {
    let chip = match form.kind.as_str() {
        "category" => FilterChip::Category,
        "gender" => FilterChip::Gender,
        "color" => FilterChip::Color(form.value),
        "max-price" => FilterChip::MaxPrice,
        other => {
            return Err(AppError::BadRequest(format!(
                "unknown filter kind: {other}"
            )));
        }
    };

    state.update_store(|s| s.remove_filter_chip(&chip))?;
    Ok(Redirect::to("/"))
}

/// Clear all active filters, then redirect back to the grid.
#[instrument(skip(state))]
pub async fn clear_filters(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.update_store(shopcommand_core::store::Store::clear_filters)?;
    Ok(Redirect::to("/"))
}
