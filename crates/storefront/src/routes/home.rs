//! Home page: command bar, active filter chips and the product grid.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use shopcommand_core::filter;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;
use crate::views::{ChipView, ProductCardView, filter_chips, product_cards};

/// Example commands shown under the command bar to teach the query
/// vocabulary.
pub const EXAMPLE_COMMANDS: &[&str] = &[
    "show me black hoodies under 2000",
    "sneakers for women",
    "something casual for college",
    "formal shirts for men",
    "cheaper jackets",
];

/// Home page template: the whole storefront lives on one page.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub query: String,
    pub chips: Vec<ChipView>,
    pub filter_count: usize,
    pub result_count: usize,
    pub products: Vec<ProductCardView>,
    pub selected_count: usize,
    pub examples: &'static [&'static str],
}

/// Build the home template from the current store snapshot. Shared by the
/// home, search and filter handlers so they all render the same page.
pub fn build_home(state: &AppState) -> Result<HomeTemplate, AppError> {
    let store = state.store()?;
    let catalog = state.catalog();

    let results = match &store.active_filters {
        Some(intent) => filter::apply(catalog, intent),
        None => catalog.iter().collect(),
    };

    let chips = store.active_filters.as_ref().map_or_else(Vec::new, filter_chips);

    Ok(HomeTemplate {
        query: store.last_query.clone(),
        filter_count: store.active_filter_count(),
        result_count: results.len(),
        products: product_cards(&results, &store.selected),
        selected_count: store.selected.len(),
        chips,
        examples: EXAMPLE_COMMANDS,
    })
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate, AppError> {
    build_home(&state)
}
