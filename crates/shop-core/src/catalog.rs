//! # Catalog Provider Trait
//!
//! Seam for the external product catalog. The search endpoint fetches the
//! full product list through a `CatalogProvider` and filters it locally.

use crate::error::ShopResult;
use crate::search::{ItemId, ResultKind, SearchResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A product as returned by the catalog provider.
///
/// Only `id` and `title` are consumed; other provider fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ItemId,
    pub title: String,
}

impl CatalogProduct {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn to_result(&self) -> SearchResult {
        SearchResult {
            id: self.id.clone(),
            name: self.title.clone(),
            kind: ResultKind::Product,
        }
    }
}

/// Read-only source of product records.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the complete product list. No pagination, no server-side filter.
    async fn fetch_products(&self) -> ShopResult<Vec<CatalogProduct>>;

    /// Provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared catalog provider (dynamic dispatch)
pub type BoxedCatalogProvider = Arc<dyn CatalogProvider>;
