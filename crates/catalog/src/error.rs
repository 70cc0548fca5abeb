//! Catalog error types.

use thiserror::Error;

/// Errors produced by the catalog engine.
///
/// The engine is total over well-formed input: malformed catalog data never
/// raises (unknown facet ids and unresolvable category ids are ignored, empty
/// result sets are a normal outcome). Only genuine contract violations from
/// the caller are surfaced as errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested page size is zero. Callers must pass a positive limit;
    /// the parameter boundary substitutes the default before building a
    /// request, so hitting this means a programming error upstream.
    #[error("invalid page limit: {0} (must be positive)")]
    InvalidLimit(u32),
}

/// Result type alias using CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
