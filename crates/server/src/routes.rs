//! Catalog route handlers.
//!
//! Read-only JSON endpoints over the catalog service. Responses are the
//! engine's own contract types serialized as-is, so the storefront UI can
//! consume them without further transformation.

use std::collections::{BTreeMap, HashMap};

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};

use vedetta_catalog::{AvailableFacet, CategoryNode, QueryResult, RawQueryParams};

use crate::error::AppResult;
use crate::state::AppState;

/// Create the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/catalog/products", get(query_products))
        .route("/api/catalog/filters", get(list_filters))
        .route("/api/catalog/categories", get(list_categories))
}

/// Product query endpoint.
///
/// Accepts the full URL parameter contract (`category`, `subcategory`,
/// `search`, `min_price`, `max_price`, `sort`, `page`, `limit`, plus one
/// parameter per facet id), along with `locale` for name resolution and
/// sorting. Parameters are taken as raw strings so the boundary can parse
/// them leniently.
async fn query_products(
    State(state): State<AppState>,
    Query(mut pairs): Query<BTreeMap<String, String>>,
) -> AppResult<Json<QueryResult>> {
    let locale = pairs
        .remove("locale")
        .unwrap_or_else(|| state.default_locale().to_string());

    let params = RawQueryParams::from_pairs(pairs);
    let result = state.catalog().query(params, &locale)?;
    Ok(Json(result))
}

/// Scope parameters for the filter panel.
#[derive(Debug, Deserialize)]
struct FilterScopeQuery {
    category: Option<String>,
    subcategory: Option<String>,
}

/// Surfaceable facets with value counts for a category scope.
async fn list_filters(
    State(state): State<AppState>,
    Query(scope): Query<FilterScopeQuery>,
) -> Json<Vec<AvailableFacet>> {
    let facets = state
        .catalog()
        .facets_for_scope(scope.category.as_deref(), scope.subcategory.as_deref());
    Json(facets)
}

/// Navigation sidebar payload: the category tree plus per-node counts.
#[derive(Debug, Serialize)]
struct CategoriesResponse {
    tree: Vec<CategoryNode>,
    counts: HashMap<String, u64>,
}

async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        tree: state.catalog().tree(),
        counts: state.catalog().counts(),
    })
}
