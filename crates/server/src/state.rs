//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::content_store::JsonContentStore;
use crate::service::CatalogService;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Arc<CatalogService>,
    store: Arc<JsonContentStore>,
    default_locale: String,
}

impl AppState {
    /// Initialize state from configuration: load the catalog snapshot and
    /// build the service on top of it.
    pub fn new(config: &Config) -> Result<Self> {
        let store = Arc::new(
            JsonContentStore::load(&config.catalog_path)
                .context("failed to load catalog snapshot")?,
        );
        let catalog = CatalogService::from_store(store.clone());

        info!(
            products = store.snapshot().products.len(),
            path = %config.catalog_path.display(),
            "catalog snapshot loaded"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                catalog,
                store,
                default_locale: config.default_locale.clone(),
            }),
        })
    }

    /// Build state directly from a service (tests).
    pub fn for_service(
        catalog: Arc<CatalogService>,
        store: Arc<JsonContentStore>,
        default_locale: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                store,
                default_locale: default_locale.into(),
            }),
        }
    }

    /// The catalog service.
    pub fn catalog(&self) -> &Arc<CatalogService> {
        &self.inner.catalog
    }

    /// The backing content store.
    pub fn store(&self) -> &Arc<JsonContentStore> {
        &self.inner.store
    }

    /// Locale used when the request specifies none.
    pub fn default_locale(&self) -> &str {
        &self.inner.default_locale
    }
}
