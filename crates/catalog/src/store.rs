//! Collaborator interfaces.
//!
//! The engine does not care how catalog content is persisted. Consumers
//! supply these three capabilities; each call hands the engine a single
//! consistent snapshot, so concurrent queries need no locking on this side.

use crate::facet::FilterFieldConfig;
use crate::models::category::CategoryNode;
use crate::models::product::Product;

/// Supplies the full set of active products.
pub trait ProductStore: Send + Sync {
    /// A consistent snapshot of all active products. The engine never
    /// observes a half-updated set mid-computation.
    fn list_active_products(&self) -> Vec<Product>;
}

/// Supplies the category/subcategory tree.
pub trait CategoryTreeProvider: Send + Sync {
    /// The current category tree (depth at most 2).
    fn resolve_category_tree(&self) -> Vec<CategoryNode>;
}

/// Supplies per-category facet configuration.
pub trait FilterConfigProvider: Send + Sync {
    /// Ordered facet definitions for a category id, in configured order.
    /// Unknown ids yield an empty list.
    fn filters_for(&self, category_id: &str) -> Vec<FilterFieldConfig>;
}
