//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the configuration, the category list, and the two external
//! collaborators behind their traits so tests can substitute doubles.

use anyhow::Context;
use shop_catalog::FakeStoreCatalog;
use shop_core::{BoxedCatalogProvider, BoxedPaymentProcessor, CategoryCatalog};
use shop_stripe::StripePaymentIntents;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Whether `GET /api/search` is served
    pub search_enabled: bool,
    /// Optional TOML file overriding the builtin categories
    pub categories_file: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup, defaulting anything unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            search_enabled: lookup("SEARCH_ENABLED")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.search_enabled),
            categories_file: lookup("CATEGORIES_FILE")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Plain,
            },
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<std::net::SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            environment: "development".to_string(),
            search_enabled: true,
            categories_file: None,
            log_format: LogFormat::Plain,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Categories searched alongside the product catalog
    pub categories: Arc<CategoryCatalog>,
    /// Product catalog; `None` when search is disabled
    pub catalog: Option<BoxedCatalogProvider>,
    /// Payment processor
    pub payments: BoxedPaymentProcessor,
}

impl AppState {
    /// Build the production state from the environment.
    ///
    /// Fails when the Stripe key is missing; the server must not start then.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let categories = load_categories(config.categories_file.as_deref())?;

        let payments = StripePaymentIntents::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;
        if payments.config().is_test_mode() {
            tracing::info!("Stripe is running with a test key");
        }

        let catalog: Option<BoxedCatalogProvider> = if config.search_enabled {
            let provider = FakeStoreCatalog::from_env()
                .map_err(|e| anyhow::anyhow!("Failed to initialize catalog: {}", e))?;
            Some(Arc::new(provider))
        } else {
            None
        };

        Ok(Self::with_providers(config, categories, catalog, Arc::new(payments)))
    }

    /// Assemble state from explicit collaborators
    pub fn with_providers(
        config: AppConfig,
        categories: CategoryCatalog,
        catalog: Option<BoxedCatalogProvider>,
        payments: BoxedPaymentProcessor,
    ) -> Self {
        Self {
            config,
            categories: Arc::new(categories),
            catalog,
            payments,
        }
    }

    /// Search is served only when enabled and a catalog is wired in
    pub fn search_enabled(&self) -> bool {
        self.config.search_enabled && self.catalog.is_some()
    }
}

/// Load categories from a TOML file, or the builtin list when no file is set
pub fn load_categories(path: Option<&Path>) -> anyhow::Result<CategoryCatalog> {
    let Some(path) = path else {
        return Ok(CategoryCatalog::builtin());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let catalog = CategoryCatalog::from_toml(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded {} categories from {}", catalog.len(), path.display());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        AppConfig::from_lookup(|key| map.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_app_config_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(config.search_enabled);
        assert!(config.categories_file.is_none());
        assert_eq!(config.log_format, LogFormat::Plain);
    }

    #[test]
    fn test_app_config_overrides() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("SEARCH_ENABLED", "off"),
            ("ENVIRONMENT", "production"),
            ("LOG_FORMAT", "json"),
            ("CATEGORIES_FILE", "config/categories.toml"),
        ]);
        assert_eq!(config.port, 8081);
        assert!(!config.search_enabled);
        assert!(config.is_production());
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.categories_file.as_deref(),
            Some(Path::new("config/categories.toml"))
        );
    }

    #[test]
    fn test_bad_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "http")]).port, 5000);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            ..AppConfig::default()
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_load_builtin_categories() {
        let catalog = load_categories(None).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.categories[0].id, "electronics");
    }

    #[test]
    fn test_load_categories_file() {
        let path = std::env::temp_dir().join(format!("storefront-categories-{}.toml", std::process::id()));
        std::fs::write(&path, "[[categories]]\nid = \"books\"\nname = \"Books\"\n").unwrap();

        let catalog = load_categories(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.categories[0].name, "Books");
    }

    #[test]
    fn test_missing_categories_file_is_error() {
        let result = load_categories(Some(Path::new("/nonexistent/categories.toml")));
        assert!(result.is_err());
    }
}
