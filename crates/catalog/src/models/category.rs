//! Category tree and count aggregation.
//!
//! The tree is at most two levels deep: top-level categories mirror the
//! [`ProductCategory`] enum, and each child defines a subcategory
//! declaratively as "parent category + attribute-equality predicate". That
//! keeps the engine to a single matching code path for both levels.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::locale::Localized;
use crate::models::product::{Product, ProductCategory};

/// Id of the synthetic root node covering the whole catalog.
pub const ALL_CATEGORIES_ID: &str = "all";

/// Exact-match predicate over a product's spec bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecFilter {
    /// Canonical spec key to read.
    pub key: String,

    /// Required value. Compared with exact, case-sensitive string equality.
    pub value: String,
}

impl SpecFilter {
    /// Whether a product's spec bag satisfies this predicate.
    pub fn matches(&self, product: &Product) -> bool {
        product.spec_value(&self.key) == Some(self.value.as_str())
    }
}

/// A node in the category tree.
///
/// Only leaf/child nodes carry `spec_filter`; a node with children is a pure
/// grouping node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Stable id used in URLs and count maps.
    pub id: String,

    /// Parent category; `None` only for the root "all" node.
    pub parent_category: Option<ProductCategory>,

    /// Per-locale display label.
    pub label: Localized,

    /// Subcategory membership predicate, when this node is a subcategory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_filter: Option<SpecFilter>,

    /// Child subcategories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
}

/// Find a node by id across the root level and one level of children.
///
/// Returns `None` for unknown ids; callers treat that as "no such scoping
/// filter" so a stale bookmarked URL still renders the full catalog.
pub fn resolve_node<'a>(tree: &'a [CategoryNode], id: &str) -> Option<&'a CategoryNode> {
    for node in tree {
        if node.id == id {
            return Some(node);
        }
        if let Some(child) = node.children.iter().find(|child| child.id == id) {
            return Some(child);
        }
    }
    None
}

/// Count products per category and subcategory.
///
/// The returned map holds [`ALL_CATEGORIES_ID`] -> total active products,
/// each top-level category id -> products in that category, and each
/// subcategory id -> products in the parent category that also satisfy the
/// subcategory's spec predicate. Independent of any active query filters;
/// recompute whenever the product snapshot changes.
pub fn category_counts(products: &[Product], tree: &[CategoryNode]) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    counts.insert(ALL_CATEGORIES_ID.to_string(), products.len() as u64);

    for category in ProductCategory::ALL {
        let count = products.iter().filter(|p| p.category == category).count();
        counts.insert(category.id().to_string(), count as u64);
    }

    for node in tree {
        for child in &node.children {
            let count = products
                .iter()
                .filter(|p| {
                    child
                        .parent_category
                        .is_none_or(|category| p.category == category)
                        && child.spec_filter.as_ref().is_none_or(|f| f.matches(p))
                })
                .count();
            counts.insert(child.id.clone(), count as u64);
        }
    }

    counts
}
