//! Catalog query engine.
//!
//! - [`types`]: request/result contracts
//! - [`engine`]: the deterministic filtering pipeline
//! - [`params`]: URL-parameter boundary producing validated requests

pub mod engine;
pub mod params;
pub mod types;

pub use engine::{run_query, scope_by_category};
pub use params::RawQueryParams;
pub use types::{PriceRange, QueryRequest, QueryResult, SortMode};
