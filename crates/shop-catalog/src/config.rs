//! # Catalog Configuration

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Catalog API configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL; products are read from `{base_url}/products`
    pub base_url: String,

    /// Per-request timeout of the HTTP client
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Load from environment variables (`CATALOG_URL`), falling back to defaults
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Some(url) = std::env::var("CATALOG_URL").ok().filter(|u| !u.is_empty()) {
            config.base_url = url;
        }
        config
    }

    /// Builder: set custom base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Full URL of the product listing
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url.trim_end_matches('/'))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
