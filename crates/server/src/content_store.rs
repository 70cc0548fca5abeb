//! JSON-file-backed content store.
//!
//! The storefront's content management lives elsewhere; this store reads the
//! snapshot it publishes — one JSON document holding products, the category
//! tree, and per-category facet configuration — and serves the engine's
//! collaborator interfaces from memory. Reload swaps the whole snapshot
//! atomically, so a query in flight keeps the set it started with.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use vedetta_catalog::store::{CategoryTreeProvider, FilterConfigProvider, ProductStore};
use vedetta_catalog::{CategoryNode, FilterFieldConfig, Product};

/// The on-disk catalog snapshot document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// All active products.
    #[serde(default)]
    pub products: Vec<Product>,

    /// The category tree (depth at most 2).
    #[serde(default)]
    pub categories: Vec<CategoryNode>,

    /// Facet configuration per category id.
    #[serde(default)]
    pub filters: HashMap<String, Vec<FilterFieldConfig>>,
}

/// Content store reading a [`CatalogDocument`] from one JSON file.
pub struct JsonContentStore {
    path: PathBuf,
    snapshot: RwLock<Arc<CatalogDocument>>,
}

impl JsonContentStore {
    /// Load the store from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let document = Self::read_document(&path)?;
        Ok(Self {
            path,
            snapshot: RwLock::new(Arc::new(document)),
        })
    }

    /// Build a store directly from a document (tests, embedded fixtures).
    pub fn from_document(document: CatalogDocument) -> Self {
        Self {
            path: PathBuf::new(),
            snapshot: RwLock::new(Arc::new(document)),
        }
    }

    /// Re-read the snapshot file and swap it in atomically.
    pub fn reload(&self) -> Result<()> {
        let document = Self::read_document(&self.path)?;
        tracing::info!(
            products = document.products.len(),
            categories = document.categories.len(),
            "catalog snapshot reloaded"
        );
        *self.snapshot.write() = Arc::new(document);
        Ok(())
    }

    /// Current snapshot handle.
    pub fn snapshot(&self) -> Arc<CatalogDocument> {
        self.snapshot.read().clone()
    }

    fn read_document(path: &Path) -> Result<CatalogDocument> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))
    }
}

impl ProductStore for JsonContentStore {
    fn list_active_products(&self) -> Vec<Product> {
        self.snapshot().products.clone()
    }
}

impl CategoryTreeProvider for JsonContentStore {
    fn resolve_category_tree(&self) -> Vec<CategoryNode> {
        self.snapshot().categories.clone()
    }
}

impl FilterConfigProvider for JsonContentStore {
    fn filters_for(&self, category_id: &str) -> Vec<FilterFieldConfig> {
        self.snapshot()
            .filters
            .get(category_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn document_parses_minimal_json() {
        let document: CatalogDocument = serde_json::from_str("{}").unwrap();
        assert!(document.products.is_empty());
        assert!(document.categories.is_empty());
        assert!(document.filters.is_empty());
    }

    #[test]
    fn unknown_category_yields_no_filters() {
        let store = JsonContentStore::from_document(CatalogDocument::default());
        assert!(store.filters_for("cameras").is_empty());
    }
}
