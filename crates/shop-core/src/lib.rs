//! # shop-core
//!
//! Core types and traits for the storefront search and payment service.
//!
//! This crate provides:
//! - `CatalogProvider` trait for the external product catalog
//! - `PaymentProcessor` trait for payment-intent creation
//! - `CategoryCatalog`, `SearchQuery` and `merge_results` for search
//! - `parse_total` and `validate_total` for payment amounts
//! - `ShopError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use shop_core::{merge_results, CategoryCatalog, SearchQuery};
//!
//! let query = SearchQuery::parse(Some("elect"))?;
//! let products = catalog.fetch_products().await?;
//! let results = merge_results(&CategoryCatalog::builtin(), &products, &query);
//! ```

pub mod catalog;
pub mod error;
pub mod payment;
pub mod search;

// Re-exports for convenience
pub use catalog::{BoxedCatalogProvider, CatalogProduct, CatalogProvider};
pub use error::{ShopError, ShopResult, SEARCH_FAILED_MESSAGE};
pub use payment::{
    parse_total, validate_total, BoxedPaymentProcessor, Currency, PaymentIntent,
    PaymentProcessor,
};
pub use search::{
    merge_results, Category, CategoryCatalog, ItemId, ResultKind, SearchQuery, SearchResult,
};
