//! Catalog data model.

pub mod category;
pub mod product;

pub use category::{CategoryNode, SpecFilter};
pub use product::{Product, ProductCategory, SpecEntry};
