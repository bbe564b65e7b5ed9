//! # Routes
//!
//! Axum router configuration for the storefront API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  / and /health   - Health check
/// - GET  /api/search     - Category and product search (when enabled)
/// - POST /payment/create - Create a payment intent
pub fn create_router(state: AppState) -> Router {
    // Any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router: Router<AppState> = Router::new()
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        .route("/payment/create", post(handlers::create_payment));

    if state.search_enabled() {
        router = router.route("/api/search", get(handlers::search));
    } else {
        tracing::info!("Search disabled, /api/search not mounted");
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
