//! The catalog filtering pipeline.
//!
//! A single deterministic pass over an immutable product snapshot:
//! category scope, free-text search, per-facet filtering, price-range
//! snapshot, price bounds, stable sort, pagination. Step order is fixed
//! because the reported price range is defined as "after search and facets,
//! before explicit price bounds".

use crate::error::{CatalogError, CatalogResult};
use crate::facet::FilterFieldConfig;
use crate::models::category::CategoryNode;
use crate::models::product::{Product, ProductCategory};
use crate::query::types::{MAX_LIMIT, PriceRange, QueryRequest, QueryResult, SortMode};

/// Restrict products to a category and, when the node carries a spec
/// predicate, to the matching subcategory. The two restrictions commute.
pub fn scope_by_category(
    products: &[Product],
    category: Option<ProductCategory>,
    node: Option<&CategoryNode>,
) -> Vec<Product> {
    products
        .iter()
        .filter(|product| category.is_none_or(|c| product.category == c))
        .filter(|product| {
            node.and_then(|n| n.spec_filter.as_ref())
                .is_none_or(|f| f.matches(product))
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match against every locale's name and the
/// slug. No tokenization, no fuzzy matching.
fn matches_search(product: &Product, needle: &str) -> bool {
    product
        .name
        .variants()
        .any(|name| name.to_lowercase().contains(needle))
        || product.slug.to_lowercase().contains(needle)
}

/// Apply selected facet values: membership within a facet, conjunction
/// across facets. Selections referencing a facet not configured for the
/// active category are ignored.
fn apply_facets(
    mut products: Vec<Product>,
    request: &QueryRequest,
    configs: &[FilterFieldConfig],
) -> Vec<Product> {
    for (facet_id, selected) in &request.facets {
        if selected.is_empty() {
            continue;
        }
        let Some(config) = configs.iter().find(|c| &c.id == facet_id) else {
            tracing::debug!(facet_id = %facet_id, "ignoring selection for unconfigured facet");
            continue;
        };
        products.retain(|product| {
            product
                .spec_value(&config.spec_key)
                .is_some_and(|value| selected.contains(value))
        });
    }
    products
}

/// Stable sort in the requested mode.
fn sort_products(products: &mut [Product], sort: SortMode, locale: &str) {
    match sort {
        SortMode::Newest => products.sort_by(|a, b| b.created.cmp(&a.created)),
        SortMode::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::NameAsc => products.sort_by(|a, b| {
            a.name
                .resolve(locale)
                .to_lowercase()
                .cmp(&b.name.resolve(locale).to_lowercase())
        }),
    }
}

/// Execute a catalog query.
///
/// Pure given identical inputs: same snapshot, same request, same configs,
/// same locale — byte-identical result. Empty result sets are a normal
/// outcome (`total_items = 0`, `total_pages = 1`, `page = 1`); the only
/// error is a zero `limit`, which is a caller contract violation.
pub fn run_query(
    products: &[Product],
    request: &QueryRequest,
    configs: &[FilterFieldConfig],
    locale: &str,
) -> CatalogResult<QueryResult> {
    if request.limit == 0 {
        return Err(CatalogError::InvalidLimit(request.limit));
    }
    let limit = if request.limit > MAX_LIMIT {
        tracing::warn!(requested = request.limit, capped = MAX_LIMIT, "limit capped");
        MAX_LIMIT
    } else {
        request.limit
    };

    // 1. Category/subcategory scope.
    let mut set = scope_by_category(products, request.category, request.subcategory.as_ref());

    // 2. Free-text search across all locale names and the slug.
    if let Some(term) = request.search.as_deref() {
        let needle = term.trim().to_lowercase();
        if !needle.is_empty() {
            set.retain(|product| matches_search(product, &needle));
        }
    }

    // 3. Facet selections.
    set = apply_facets(set, request, configs);

    // 4. Price range snapshot, before explicit bounds are applied.
    let price_range = PriceRange::of(&set);

    // 5. Explicit price bounds.
    if let Some(min) = request.min_price {
        set.retain(|product| product.price >= min);
    }
    if let Some(max) = request.max_price {
        set.retain(|product| product.price <= max);
    }

    // 6. Stable sort.
    sort_products(&mut set, request.sort, locale);

    // 7. Pagination with page clamping.
    let total_items = set.len() as u64;
    let total_pages = (total_items.div_ceil(u64::from(limit)) as u32).max(1);
    let page = request.page.clamp(1, total_pages);

    let start = (page as usize - 1) * limit as usize;
    let end = (start + limit as usize).min(set.len());
    let items = if start < set.len() {
        set[start..end].to_vec()
    } else {
        Vec::new()
    };

    Ok(QueryResult {
        items,
        total_items,
        total_pages,
        page,
        limit,
        price_range,
    })
}
