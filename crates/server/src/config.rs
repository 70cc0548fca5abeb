//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Path to the catalog snapshot file (default: ./catalog.json).
    pub catalog_path: PathBuf,

    /// Locale used when a request specifies none (default: "en").
    pub default_locale: String,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source. Split out so
    /// tests can supply values without touching the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let catalog_path = lookup("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./catalog.json"));

        let default_locale = lookup("DEFAULT_LOCALE").unwrap_or_else(|| "en".to_string());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            port,
            catalog_path,
            default_locale,
            cors_allowed_origins,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        |key| vars.get(key).map(|v| (*v).to_string())
    }

    #[test]
    fn defaults_when_no_variables_set() {
        let vars = HashMap::new();
        let config = Config::from_lookup(lookup_in(&vars)).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.catalog_path, PathBuf::from("./catalog.json"));
        assert_eq!(config.default_locale, "en");
        assert_eq!(config.cors_allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn reads_provided_variables() {
        let mut vars = HashMap::new();
        vars.insert("PORT", "8080");
        vars.insert("CATALOG_PATH", "/srv/vedetta/catalog.json");
        vars.insert("DEFAULT_LOCALE", "ro");
        vars.insert("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example");

        let config = Config::from_lookup(lookup_in(&vars)).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_path, PathBuf::from("/srv/vedetta/catalog.json"));
        assert_eq!(config.default_locale, "ro");
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn malformed_port_is_an_error() {
        let mut vars = HashMap::new();
        vars.insert("PORT", "not-a-port");

        let err = Config::from_lookup(lookup_in(&vars)).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
