//! Query request and result contracts.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::category::CategoryNode;
use crate::models::product::{Product, ProductCategory};

/// Default page size when the caller specifies none.
pub const DEFAULT_LIMIT: u32 = 16;

/// Upper bound on page size; larger requests are capped with a warning.
pub const MAX_LIMIT: u32 = 100;

/// Sort modes for query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Descending by creation time (default).
    #[default]
    Newest,
    /// Ascending by price.
    PriceAsc,
    /// Descending by price.
    PriceDesc,
    /// Ascending by the resolved per-locale name.
    NameAsc,
}

/// A validated catalog query.
///
/// Built either directly (tests, internal callers) or from URL parameters
/// via [`super::params::RawQueryParams`]. The engine assumes well-formed
/// numeric fields; parsing and validation happen at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Restrict to one top-level category.
    pub category: Option<ProductCategory>,

    /// Resolved subcategory node; its predicate further restricts the scope.
    pub subcategory: Option<CategoryNode>,

    /// Selected values per facet id. OR within a facet, AND across facets.
    /// Ordered maps/sets keep serialized requests stable.
    #[serde(default)]
    pub facets: BTreeMap<String, BTreeSet<String>>,

    /// Free-text search term, matched case-insensitively as a substring of
    /// any locale's name or the slug.
    pub search: Option<String>,

    /// Inclusive lower price bound.
    pub min_price: Option<f64>,

    /// Inclusive upper price bound.
    pub max_price: Option<f64>,

    /// Sort mode.
    #[serde(default)]
    pub sort: SortMode,

    /// Requested page, 1-based. Out-of-range values are clamped.
    pub page: u32,

    /// Page size. Must be positive; values above [`MAX_LIMIT`] are capped.
    pub limit: u32,
}

impl QueryRequest {
    /// A request with default paging and no filters.
    pub fn new() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            ..Self::default()
        }
    }
}

/// Price bounds of a product set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Bounds over a product set; both zero when the set is empty.
    pub fn of(products: &[Product]) -> Self {
        let mut iter = products.iter().map(|p| p.price);
        let Some(first) = iter.next() else {
            return Self::default();
        };

        let mut range = Self {
            min: first,
            max: first,
        };
        for price in iter {
            range.min = range.min.min(price);
            range.max = range.max.max(price);
        }
        range
    }
}

/// One result page plus paging metadata and the available price range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Products on this page, in final sort order.
    pub items: Vec<Product>,

    /// Total matching products across all pages.
    pub total_items: u64,

    /// Total pages; at least 1 even for an empty result.
    pub total_pages: u32,

    /// Effective page after clamping into `[1, total_pages]`.
    pub page: u32,

    /// Effective page size.
    pub limit: u32,

    /// Price bounds of the scoped set before explicit price bounds were
    /// applied — "what range is available to filter within".
    pub price_range: PriceRange,
}
