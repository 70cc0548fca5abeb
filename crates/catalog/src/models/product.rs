//! Product entity and its flexible spec bag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::Localized;

/// Top-level product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Cameras,
    NvrKits,
    Storage,
    Accessories,
    Services,
}

impl ProductCategory {
    /// All categories in navigation order.
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::Cameras,
        ProductCategory::NvrKits,
        ProductCategory::Storage,
        ProductCategory::Accessories,
        ProductCategory::Services,
    ];

    /// The stable identifier used in URLs and count maps.
    pub fn id(self) -> &'static str {
        match self {
            ProductCategory::Cameras => "cameras",
            ProductCategory::NvrKits => "nvr-kits",
            ProductCategory::Storage => "storage",
            ProductCategory::Accessories => "accessories",
            ProductCategory::Services => "services",
        }
    }

    /// Parse a category id as it appears in URLs.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// One entry in a product's spec bag.
///
/// The key carries per-locale display labels; its canonical (source-locale)
/// form is what facet configs and subcategory predicates match against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    /// Per-locale attribute label; the canonical variant is the lookup key.
    pub key: Localized,

    /// Attribute value (always stored in its source form, e.g. "4 MP").
    pub value: String,
}

/// An active catalog product.
///
/// The engine only ever reads an immutable snapshot of these; creation and
/// editing belong to the content-management collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id.
    pub id: Uuid,

    /// URL slug; participates in free-text search.
    pub slug: String,

    /// Top-level category.
    pub category: ProductCategory,

    /// Price in the store currency. `0.0` means "price on request".
    pub price: f64,

    /// Creation time; drives the default "newest" sort.
    pub created: DateTime<Utc>,

    /// Per-locale display name.
    pub name: Localized,

    /// Ordered attribute bag. Within one product each canonical key occurs
    /// at most once; if data violates that, the first match wins.
    #[serde(default)]
    pub specs: Vec<SpecEntry>,
}

impl Product {
    /// Look up a spec value by canonical key. Empty values count as absent.
    pub fn spec_value(&self, canonical_key: &str) -> Option<&str> {
        self.specs
            .iter()
            .find(|entry| entry.key.canonical() == canonical_key)
            .map(|entry| entry.value.as_str())
            .filter(|value| !value.is_empty())
    }
}
