//! Application state shared across handlers.

use std::sync::{Arc, RwLock};

use shopcommand_core::store::Store;
use shopcommand_core::{Product, catalog};

use crate::config::StorefrontConfig;
use crate::error::AppError;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The catalog is read-only static data; the
/// only mutable piece is the [`Store`], which is replaced wholesale by pure
/// reducers under a write lock. Each user action is one atomic swap - no
/// handler ever awaits while holding the lock.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Vec<Product>,
    store: RwLock<Store>,
}

impl AppState {
    /// Create a new application state with the seeded catalog and an empty
    /// store.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: catalog::seed(),
                store: RwLock::new(Store::default()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the read-only product catalog.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.inner.catalog
    }

    /// Look up a catalog product by id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.inner.catalog.iter().find(|p| p.id.as_str() == id)
    }

    /// Snapshot the current store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the store lock is poisoned.
    pub fn store(&self) -> Result<Store, AppError> {
        self.inner
            .store
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
    }

    /// Apply a pure reducer to the store and install the result atomically.
    /// Returns the new store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the store lock is poisoned.
    pub fn update_store<F>(&self, reduce: F) -> Result<Store, AppError>
    where
        F: FnOnce(Store) -> Store,
    {
        let mut guard = self
            .inner
            .store
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        let next = reduce(guard.clone());
        *guard = next.clone();
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcommand_core::ProductId;

    fn test_state() -> AppState {
        AppState::new(StorefrontConfig {
            host: std::net::IpAddr::from([127, 0, 0, 1]),
            port: 0,
            base_url: "http://localhost".to_string(),
        })
    }

    #[test]
    fn test_update_store_is_visible_to_snapshots() {
        let state = test_state();
        let id = ProductId::new("essential-cotton-tee");

        let updated = state
            .update_store(|s| s.add_to_cart(&id))
            .expect("store update");
        assert_eq!(updated.cart_count(), 1);

        let snapshot = state.store().expect("store snapshot");
        assert_eq!(snapshot, updated);
    }

    #[test]
    fn test_product_lookup() {
        let state = test_state();
        assert!(state.product("chelsea-boots").is_some());
        assert!(state.product("no-such-product").is_none());
    }
}
