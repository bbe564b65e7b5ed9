//! # shop-catalog
//!
//! Catalog provider for storefront-rs backed by a Fake Store style REST API
//! (`GET /products`). Filtering happens in the search handler, not here.

pub mod config;
pub mod fakestore;

pub use config::CatalogConfig;
pub use fakestore::FakeStoreCatalog;
