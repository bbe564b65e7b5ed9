#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shop_api::{create_router, AppConfig, AppState};
use shop_core::{
    BoxedCatalogProvider, CatalogProduct, CatalogProvider, CategoryCatalog, Currency,
    PaymentIntent, PaymentProcessor, ShopError, ShopResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Catalog double that serves a fixed product list or fails
pub struct FakeCatalog {
    products: Vec<CatalogProduct>,
    fail: bool,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn with_products(products: Vec<CatalogProduct>) -> Arc<Self> {
        Arc::new(Self {
            products,
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn store() -> Arc<Self> {
        Self::with_products(vec![
            CatalogProduct::new(1, "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops"),
            CatalogProduct::new(2, "Mens Casual Premium Slim Fit T-Shirts"),
            CatalogProduct::new(5, "John Hardy Women's Legends Naga Gold & Silver Dragon Bracelet"),
            CatalogProduct::new(10, "SanDisk SSD PLUS 1TB Internal SSD - SATA III 6 Gb/s"),
            CatalogProduct::new(20, "DANVOUY Womens T Shirt Casual Cotton Short"),
        ])
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            products: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogProvider for FakeCatalog {
    async fn fetch_products(&self) -> ShopResult<Vec<CatalogProduct>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ShopError::Network("connection reset by peer".to_string()));
        }
        Ok(self.products.clone())
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

/// Processor double that records every request
pub struct FakeProcessor {
    outcome: Result<String, String>,
    requests: Mutex<Vec<(i64, Currency)>>,
}

impl FakeProcessor {
    pub fn succeeding(client_secret: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(client_secret.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<(i64, Currency)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProcessor for FakeProcessor {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: Currency,
    ) -> ShopResult<PaymentIntent> {
        self.requests.lock().unwrap().push((amount, currency));
        match &self.outcome {
            Ok(secret) => Ok(PaymentIntent {
                id: "pi_fake".to_string(),
                client_secret: secret.clone(),
                amount,
                currency,
                status: Some("requires_payment_method".to_string()),
                created_at: None,
            }),
            Err(message) => Err(ShopError::Processor {
                provider: "fake".to_string(),
                message: message.clone(),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

pub fn server_with(catalog: Option<Arc<FakeCatalog>>, processor: Arc<FakeProcessor>) -> TestServer {
    let config = AppConfig {
        search_enabled: catalog.is_some(),
        ..AppConfig::default()
    };
    let catalog = catalog.map(|c| c as BoxedCatalogProvider);
    let state = AppState::with_providers(config, CategoryCatalog::builtin(), catalog, processor);

    TestServer::new(create_router(state)).unwrap()
}
