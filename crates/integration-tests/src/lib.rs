//! Integration tests for ShopCommand.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopcommand-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `query_flows` - End-to-end intent parsing and filtering over the
//!   seeded catalog
//! - `storefront_http` - In-process HTTP tests against the axum router
//!
//! The storefront keeps everything in memory, so each test builds its own
//! app with a fresh state and drives it through `tower::ServiceExt`; no
//! server, database or network is involved.

use axum::Router;
use shopcommand_storefront::config::StorefrontConfig;
use shopcommand_storefront::state::AppState;

/// Build a storefront app with a fresh seeded state for one test.
#[must_use]
pub fn test_app() -> Router {
    shopcommand_storefront::app(test_state())
}

/// Build a fresh application state bound to a throwaway address.
#[must_use]
pub fn test_state() -> AppState {
    AppState::new(StorefrontConfig {
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        base_url: "http://localhost".to_string(),
    })
}
