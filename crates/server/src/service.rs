//! Catalog service with caching.
//!
//! Ties the three content collaborators together and caches the aggregations
//! that back the navigation sidebar (category counts) and the filter panel
//! (available facets per scope). Query execution itself is never cached; it
//! is a cheap pure pass over the snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use dashmap::DashMap;

use vedetta_catalog::models::category::ALL_CATEGORIES_ID;
use vedetta_catalog::store::{CategoryTreeProvider, FilterConfigProvider, ProductStore};
use vedetta_catalog::{
    AvailableFacet, CatalogResult, CategoryNode, ProductCategory, QueryResult, RawQueryParams,
    available_facets, category_counts, resolve_node, run_query, scope_by_category,
};

use crate::content_store::JsonContentStore;

/// Service for executing catalog queries and aggregations.
pub struct CatalogService {
    products: Arc<dyn ProductStore>,
    categories: Arc<dyn CategoryTreeProvider>,
    filters: Arc<dyn FilterConfigProvider>,
    /// Cache: scope key ("category/subcategory") -> surfaceable facets.
    facet_cache: DashMap<String, Vec<AvailableFacet>>,
    /// Cache: category/subcategory id -> product count.
    counts_cache: DashMap<String, u64>,
}

impl CatalogService {
    /// Create a new CatalogService from its collaborators.
    pub fn new(
        products: Arc<dyn ProductStore>,
        categories: Arc<dyn CategoryTreeProvider>,
        filters: Arc<dyn FilterConfigProvider>,
    ) -> Arc<Self> {
        Arc::new(Self {
            products,
            categories,
            filters,
            facet_cache: DashMap::new(),
            counts_cache: DashMap::new(),
        })
    }

    /// Convenience constructor for the common single-store setup.
    pub fn from_store(store: Arc<JsonContentStore>) -> Arc<Self> {
        Self::new(store.clone(), store.clone(), store)
    }

    /// Execute a query described by raw URL parameters.
    pub fn query(&self, params: RawQueryParams, locale: &str) -> CatalogResult<QueryResult> {
        let tree = self.categories.resolve_category_tree();
        let configs = self
            .filters
            .filters_for(params.category.as_deref().unwrap_or(ALL_CATEGORIES_ID));

        let request = params.into_request(&tree, &configs);
        let products = self.products.list_active_products();

        run_query(&products, &request, &configs, locale)
    }

    /// Surfaceable facets (with value counts) for a category/subcategory
    /// scope, cached until the next invalidation.
    pub fn facets_for_scope(
        &self,
        category_id: Option<&str>,
        subcategory_id: Option<&str>,
    ) -> Vec<AvailableFacet> {
        let key = format!(
            "{}/{}",
            category_id.unwrap_or(ALL_CATEGORIES_ID),
            subcategory_id.unwrap_or("")
        );
        if let Some(cached) = self.facet_cache.get(&key) {
            return cached.clone();
        }

        let tree = self.categories.resolve_category_tree();
        let category = category_id.and_then(ProductCategory::parse);
        let node = subcategory_id.and_then(|id| resolve_node(&tree, id)).cloned();

        let products = self.products.list_active_products();
        let scoped = scope_by_category(&products, category, node.as_ref());
        let configs = self
            .filters
            .filters_for(category_id.unwrap_or(ALL_CATEGORIES_ID));

        let facets = available_facets(&scoped, &configs);
        self.facet_cache.insert(key, facets.clone());
        facets
    }

    /// Product counts for the navigation sidebar, cached until the next
    /// invalidation. Independent of any active query filters.
    pub fn counts(&self) -> HashMap<String, u64> {
        if !self.counts_cache.is_empty() {
            return self
                .counts_cache
                .iter()
                .map(|entry| (entry.key().clone(), *entry.value()))
                .collect();
        }

        let products = self.products.list_active_products();
        let tree = self.categories.resolve_category_tree();
        let counts = category_counts(&products, &tree);
        for (id, count) in &counts {
            self.counts_cache.insert(id.clone(), *count);
        }
        counts
    }

    /// The current category tree.
    pub fn tree(&self) -> Vec<CategoryNode> {
        self.categories.resolve_category_tree()
    }

    /// Drop cached aggregations. Call after the underlying snapshot changes.
    pub fn invalidate_cache(&self) {
        self.facet_cache.clear();
        self.counts_cache.clear();
    }

    /// Reload a file-backed store and invalidate caches in one step.
    pub fn reload_from(&self, store: &JsonContentStore) -> Result<()> {
        store.reload()?;
        self.invalidate_cache();
        Ok(())
    }
}
