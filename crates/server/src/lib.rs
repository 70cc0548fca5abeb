//! Vedetta storefront catalog server.
//!
//! Thin JSON read surface over the [`vedetta_catalog`] engine: an env-driven
//! config, a JSON-file-backed content store, a caching catalog service, and
//! axum routes that serialize engine output directly.

pub mod config;
pub mod content_store;
pub mod error;
pub mod routes;
pub mod service;
pub mod state;

pub use config::Config;
pub use content_store::JsonContentStore;
pub use error::{AppError, AppResult};
pub use service::CatalogService;
pub use state::AppState;
