//! # Fake Store Catalog
//!
//! Reads the full product list from a Fake Store style API. The payload is
//! decoded into typed records at the boundary; anything that is not an array
//! of `{ id, title }` objects counts as the catalog being unavailable.

use crate::config::CatalogConfig;
use async_trait::async_trait;
use reqwest::Client;
use shop_core::{CatalogProduct, CatalogProvider, ShopError, ShopResult};
use tracing::{debug, error, instrument};

pub struct FakeStoreCatalog {
    config: CatalogConfig,
    client: Client,
}

impl FakeStoreCatalog {
    pub fn new(config: CatalogConfig) -> ShopResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ShopError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn from_env() -> ShopResult<Self> {
        Self::new(CatalogConfig::from_env())
    }
}

#[async_trait]
impl CatalogProvider for FakeStoreCatalog {
    #[instrument(skip(self))]
    async fn fetch_products(&self) -> ShopResult<Vec<CatalogProduct>> {
        let url = self.config.products_url();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ShopError::CatalogUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ShopError::CatalogUnavailable(e.to_string()))?;

        if !status.is_success() {
            error!("Catalog API error: status={}, body={}", status, body);
            return Err(ShopError::CatalogUnavailable(format!("HTTP {}", status)));
        }

        let products: Vec<CatalogProduct> = serde_json::from_str(&body).map_err(|e| {
            ShopError::CatalogUnavailable(format!("Failed to parse catalog response: {}", e))
        })?;

        debug!("Fetched {} products from {}", products.len(), url);
        Ok(products)
    }

    fn provider_name(&self) -> &'static str {
        "fakestore"
    }
}
