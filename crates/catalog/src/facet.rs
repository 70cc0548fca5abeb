//! Facet configuration and value computation.
//!
//! A facet is a user-selectable filter dimension read from the product spec
//! bag. Which facets exist for a category is injected via
//! [`FilterFieldConfig`] — the engine hardcodes no attribute names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::locale::Localized;
use crate::models::product::Product;

/// One configurable facet for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterFieldConfig {
    /// Stable id, doubling as the URL parameter key.
    pub id: String,

    /// Canonical spec key this facet reads.
    pub spec_key: String,

    /// Per-locale display label.
    pub label: Localized,

    /// Display order, ascending.
    pub priority: u32,

    /// Whether the UI renders the facet expanded by default. Carried for
    /// interface parity only; filtering never consults it.
    #[serde(default)]
    pub default_expanded: bool,
}

/// A computed facet value with its occurrence count. Ephemeral, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValueOption {
    pub value: String,
    pub count: u64,
}

/// Distinct values of `spec_key` across `products`, with counts, sorted
/// ascending by value (ordinal comparison).
///
/// Products lacking the key, or holding an empty value, are skipped. The
/// function is filter-set-agnostic: callers pass the category/subcategory
/// scoped set (not the fully filtered one) so that unchecking a value in one
/// facet never makes other facets' options disappear.
pub fn compute_facet_values(products: &[Product], spec_key: &str) -> Vec<FacetValueOption> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for product in products {
        if let Some(value) = product.spec_value(spec_key) {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(value, count)| FacetValueOption {
            value: value.to_string(),
            count,
        })
        .collect()
}

/// A facet config paired with its available values for the current scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableFacet {
    pub config: FilterFieldConfig,
    pub options: Vec<FacetValueOption>,
}

/// Compute the surfaceable facets for a scoped product set.
///
/// Facets come back ordered by `priority`; a facet with zero available
/// values for the scope is dropped entirely.
pub fn available_facets(
    scoped: &[Product],
    configs: &[FilterFieldConfig],
) -> Vec<AvailableFacet> {
    let mut facets: Vec<AvailableFacet> = configs
        .iter()
        .filter_map(|config| {
            let options = compute_facet_values(scoped, &config.spec_key);
            if options.is_empty() {
                None
            } else {
                Some(AvailableFacet {
                    config: config.clone(),
                    options,
                })
            }
        })
        .collect();

    facets.sort_by_key(|facet| facet.config.priority);
    facets
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::locale::Localized;
    use crate::models::product::{ProductCategory, SpecEntry};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn camera(resolution: Option<&str>) -> Product {
        let specs = resolution
            .map(|value| {
                vec![SpecEntry {
                    key: Localized::new("Resolution"),
                    value: value.to_string(),
                }]
            })
            .unwrap_or_default();

        Product {
            id: Uuid::nil(),
            slug: "camera".to_string(),
            category: ProductCategory::Cameras,
            price: 99.0,
            created: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            name: Localized::new("Camera"),
            specs,
        }
    }

    fn resolution_config() -> FilterFieldConfig {
        FilterFieldConfig {
            id: "resolution".to_string(),
            spec_key: "Resolution".to_string(),
            label: Localized::new("Resolution"),
            priority: 10,
            default_expanded: true,
        }
    }

    #[test]
    fn counts_distinct_values() {
        let products = vec![
            camera(Some("4 MP")),
            camera(Some("2 MP")),
            camera(Some("4 MP")),
            camera(None),
        ];

        let options = compute_facet_values(&products, "Resolution");

        assert_eq!(
            options,
            vec![
                FacetValueOption {
                    value: "2 MP".to_string(),
                    count: 1
                },
                FacetValueOption {
                    value: "4 MP".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn values_sorted_lexicographically() {
        let products = vec![
            camera(Some("8 MP")),
            camera(Some("2 MP")),
            camera(Some("4 MP")),
        ];

        let values: Vec<String> = compute_facet_values(&products, "Resolution")
            .into_iter()
            .map(|o| o.value)
            .collect();

        assert_eq!(values, vec!["2 MP", "4 MP", "8 MP"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(compute_facet_values(&[], "Resolution").is_empty());
        assert!(compute_facet_values(&[camera(None)], "Brand").is_empty());
    }

    #[test]
    fn available_facets_orders_by_priority_and_drops_empty() {
        let brand = FilterFieldConfig {
            id: "brand".to_string(),
            spec_key: "Brand".to_string(),
            label: Localized::new("Brand"),
            priority: 5,
            default_expanded: false,
        };
        let products = vec![camera(Some("4 MP")), camera(Some("2 MP"))];

        // Brand has no values in scope: dropped even though its priority
        // would place it first.
        let facets = available_facets(&products, &[resolution_config(), brand]);

        assert_eq!(facets.len(), 1);
        assert_eq!(facets[0].config.id, "resolution");
        assert_eq!(facets[0].options.len(), 2);
    }
}
