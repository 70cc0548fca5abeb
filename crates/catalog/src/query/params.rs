//! URL-parameter boundary.
//!
//! Consumers derive queries from URL query strings: one parameter per
//! configured facet id holding comma-separated selected values, plus the
//! fixed `category`/`subcategory`/`search`/`min_price`/`max_price`/`sort`/
//! `page`/`limit` parameters. [`RawQueryParams`] deserializes that shape and
//! resolves it into a validated [`QueryRequest`], dropping anything the
//! current catalog no longer knows about — a stale bookmarked URL must still
//! render something.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::facet::FilterFieldConfig;
use crate::models::category::{CategoryNode, resolve_node};
use crate::models::product::ProductCategory;
use crate::query::types::{DEFAULT_LIMIT, QueryRequest, SortMode};

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn parse_lenient<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::debug!(param = %key, value = %value, "ignoring malformed parameter");
            None
        }
    }
}

/// Raw query parameters, as deserialized from a URL query string.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQueryParams {
    /// Category id (e.g. "cameras").
    pub category: Option<String>,

    /// Subcategory node id.
    pub subcategory: Option<String>,

    /// Free-text search term.
    pub search: Option<String>,

    /// Inclusive lower price bound.
    pub min_price: Option<f64>,

    /// Inclusive upper price bound.
    pub max_price: Option<f64>,

    /// Sort mode (defaults to newest).
    #[serde(default)]
    pub sort: SortMode,

    /// Page number, 1-based.
    #[serde(default = "default_page")]
    pub page: u32,

    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Everything else: per-facet parameters keyed by facet id, each a
    /// comma-separated list of selected values.
    #[serde(flatten)]
    pub facets: BTreeMap<String, String>,
}

impl Default for RawQueryParams {
    fn default() -> Self {
        Self {
            category: None,
            subcategory: None,
            search: None,
            min_price: None,
            max_price: None,
            sort: SortMode::default(),
            page: default_page(),
            limit: default_limit(),
            facets: BTreeMap::new(),
        }
    }
}

impl RawQueryParams {
    /// Build from loose key/value pairs (e.g. a decoded URL query string).
    ///
    /// Numeric and sort parameters are parsed leniently: a malformed value
    /// falls back to the default rather than failing the request, logged at
    /// debug. Every unrecognized key is kept as a candidate facet parameter.
    pub fn from_pairs(pairs: BTreeMap<String, String>) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "category" => params.category = Some(value),
                "subcategory" => params.subcategory = Some(value),
                "search" => params.search = Some(value),
                "min_price" => params.min_price = parse_lenient(&key, &value),
                "max_price" => params.max_price = parse_lenient(&key, &value),
                "page" => params.page = parse_lenient(&key, &value).unwrap_or_else(default_page),
                "limit" => params.limit = parse_lenient(&key, &value).unwrap_or_else(default_limit),
                "sort" => match serde_json::from_value(serde_json::Value::String(value)) {
                    Ok(sort) => params.sort = sort,
                    Err(_) => tracing::debug!("ignoring unknown sort mode"),
                },
                _ => {
                    params.facets.insert(key, value);
                }
            }
        }

        params
    }

    /// Resolve raw parameters into a validated [`QueryRequest`].
    ///
    /// Unknown category ids, unresolvable subcategory ids, and parameters
    /// that are not configured facet ids for the resolved category are
    /// dropped (logged at debug), never errors. A zero `limit` is replaced
    /// with the default here so the engine's contract is upheld.
    pub fn into_request(
        self,
        tree: &[CategoryNode],
        configs: &[FilterFieldConfig],
    ) -> QueryRequest {
        let category = self.category.as_deref().and_then(|id| {
            let parsed = ProductCategory::parse(id);
            if parsed.is_none() {
                tracing::debug!(category = %id, "ignoring unknown category id");
            }
            parsed
        });

        let subcategory = self.subcategory.as_deref().and_then(|id| {
            let node = resolve_node(tree, id);
            if node.is_none() {
                tracing::debug!(subcategory = %id, "ignoring unresolvable subcategory id");
            }
            node.cloned()
        });

        let mut facets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (param, raw) in self.facets {
            if !configs.iter().any(|config| config.id == param) {
                tracing::debug!(param = %param, "ignoring parameter with no matching facet");
                continue;
            }
            let values: BTreeSet<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .collect();
            if !values.is_empty() {
                facets.insert(param, values);
            }
        }

        let limit = if self.limit == 0 {
            tracing::debug!("zero limit replaced with default");
            DEFAULT_LIMIT
        } else {
            self.limit
        };

        QueryRequest {
            category,
            subcategory,
            facets,
            search: self.search.filter(|term| !term.trim().is_empty()),
            min_price: self.min_price,
            max_price: self.max_price,
            sort: self.sort,
            page: self.page.max(1),
            limit,
        }
    }
}
