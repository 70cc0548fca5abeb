//! Vedetta catalog engine.
//!
//! Pure, synchronous faceted-search core for the storefront:
//! - Category/subcategory scoping over a hierarchical category tree
//! - Dynamic per-category facets with value counts
//! - Free-text search, price bounds, stable sorting, pagination
//!
//! The engine performs no I/O and holds no shared state: every operation is
//! a function of an immutable product snapshot handed in per call. Content
//! storage, the category tree, and facet configuration are external
//! collaborators consumed through the traits in [`store`].

pub mod error;
pub mod facet;
pub mod locale;
pub mod models;
pub mod query;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use facet::{
    AvailableFacet, FacetValueOption, FilterFieldConfig, available_facets, compute_facet_values,
};
pub use locale::Localized;
pub use models::category::{CategoryNode, SpecFilter, category_counts, resolve_node};
pub use models::product::{Product, ProductCategory, SpecEntry};
pub use query::engine::{run_query, scope_by_category};
pub use query::params::RawQueryParams;
pub use query::types::{PriceRange, QueryRequest, QueryResult, SortMode};
