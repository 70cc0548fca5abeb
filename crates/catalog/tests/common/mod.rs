#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Shared catalog fixtures for integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use uuid::Uuid;
use vedetta_catalog::{
    CategoryNode, FilterFieldConfig, Localized, Product, ProductCategory, SpecEntry, SpecFilter,
};

/// Build one camera product. `day` spaces out `created` for sort tests.
pub fn camera(slug: &str, name: &str, price: f64, resolution: &str, brand: &str, day: u32) -> Product {
    Product {
        id: Uuid::nil(),
        slug: slug.to_string(),
        category: ProductCategory::Cameras,
        price,
        created: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
        name: Localized::new(name).with("ro", format!("Cameră {name}")),
        specs: vec![
            SpecEntry {
                key: Localized::new("Resolution").with("ro", "Rezoluție"),
                value: resolution.to_string(),
            },
            SpecEntry {
                key: Localized::new("Brand"),
                value: brand.to_string(),
            },
        ],
    }
}

/// Ten cameras with prices `[79, 99, 99, 129, 149, 169, 189, 199, 219, 299]`
/// and resolution distribution `{2 MP: 3, 4 MP: 4, 8 MP: 3}`.
pub fn camera_catalog() -> Vec<Product> {
    vec![
        camera("bullet-2mp-eco", "Bullet 2MP Eco", 79.0, "2 MP", "Hikvision", 1),
        camera("dome-2mp", "Dome 2MP", 99.0, "2 MP", "Hikvision", 2),
        camera("bullet-4mp", "Bullet 4MP", 99.0, "4 MP", "Hikvision", 3),
        camera("turret-2mp-ir", "Turret 2MP IR", 129.0, "2 MP", "Hikvision", 4),
        camera("dome-4mp", "Dome 4MP", 149.0, "4 MP", "Hikvision", 5),
        camera("turret-4mp", "Turret 4MP", 169.0, "4 MP", "Dahua", 6),
        camera("bullet-8mp", "Bullet 8MP", 189.0, "8 MP", "Dahua", 7),
        camera("ptz-4mp", "PTZ 4MP", 199.0, "4 MP", "Dahua", 8),
        camera("dome-8mp", "Dome 8MP", 219.0, "8 MP", "Dahua", 9),
        camera("ptz-8mp-pro", "PTZ 8MP Pro", 299.0, "8 MP", "Dahua", 10),
    ]
}

/// An installation service priced at `0.0` ("price on request").
pub fn install_service(slug: &str, day: u32) -> Product {
    Product {
        id: Uuid::nil(),
        slug: slug.to_string(),
        category: ProductCategory::Services,
        price: 0.0,
        created: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
        name: Localized::new("Installation Service"),
        specs: vec![],
    }
}

/// A storage product, for cross-category tests.
pub fn storage_disk(slug: &str, price: f64, day: u32) -> Product {
    Product {
        id: Uuid::nil(),
        slug: slug.to_string(),
        category: ProductCategory::Storage,
        price,
        created: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
        name: Localized::new("Surveillance HDD"),
        specs: vec![],
    }
}

/// Facet configs for the cameras category: resolution, then brand.
pub fn camera_configs() -> Vec<FilterFieldConfig> {
    vec![
        FilterFieldConfig {
            id: "resolution".to_string(),
            spec_key: "Resolution".to_string(),
            label: Localized::new("Resolution").with("ro", "Rezoluție"),
            priority: 10,
            default_expanded: true,
        },
        FilterFieldConfig {
            id: "brand".to_string(),
            spec_key: "Brand".to_string(),
            label: Localized::new("Brand"),
            priority: 20,
            default_expanded: false,
        },
    ]
}

/// Category tree: cameras with 4 MP and 8 MP subcategories, plus storage.
pub fn category_tree() -> Vec<CategoryNode> {
    vec![
        CategoryNode {
            id: "cameras".to_string(),
            parent_category: Some(ProductCategory::Cameras),
            label: Localized::new("Cameras"),
            spec_filter: None,
            children: vec![
                CategoryNode {
                    id: "cameras-4mp".to_string(),
                    parent_category: Some(ProductCategory::Cameras),
                    label: Localized::new("4 MP Cameras"),
                    spec_filter: Some(SpecFilter {
                        key: "Resolution".to_string(),
                        value: "4 MP".to_string(),
                    }),
                    children: vec![],
                },
                CategoryNode {
                    id: "cameras-8mp".to_string(),
                    parent_category: Some(ProductCategory::Cameras),
                    label: Localized::new("8 MP Cameras"),
                    spec_filter: Some(SpecFilter {
                        key: "Resolution".to_string(),
                        value: "8 MP".to_string(),
                    }),
                    children: vec![],
                },
            ],
        },
        CategoryNode {
            id: "storage".to_string(),
            parent_category: Some(ProductCategory::Storage),
            label: Localized::new("Storage"),
            spec_filter: None,
            children: vec![],
        },
    ]
}
