//! # Request Handlers
//!
//! Axum request handlers for the storefront API.
//! Every handler turns its own failures into a JSON response; nothing
//! propagates past the handler.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use shop_core::{
    merge_results, parse_total, validate_total, Currency, SearchQuery, SearchResult, ShopError,
};
use tracing::{debug, error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Query-string pairs in arrival order.
///
/// Extracted as raw pairs so a repeated key never becomes an extractor
/// rejection; lookups keep the first value.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Create payment response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePaymentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// Error response.
///
/// The guard for non-positive totals answers with `message`; every other
/// failure answers with `error`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorResponse {
    Error { error: String },
    Message { message: String },
}

impl ErrorResponse {
    pub fn error(error: impl Into<String>) -> Self {
        ErrorResponse::Error {
            error: error.into(),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        ErrorResponse::Message {
            message: message.into(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn shop_error_to_response(err: ShopError) -> ApiError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match &err {
        ShopError::NonPositiveTotal => ErrorResponse::message(err.public_message()),
        _ => ErrorResponse::error(err.public_message()),
    };
    (status, Json(body))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Success !" }))
}

/// Search categories and catalog products by case-insensitive substring
#[instrument(skip(state, params))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let query = SearchQuery::parse(params.first("query")).map_err(|e| {
        info!("Search query is missing or empty");
        shop_error_to_response(e)
    })?;

    let catalog = state.catalog.as_ref().ok_or_else(|| {
        warn!("Search requested but no catalog provider is configured");
        shop_error_to_response(ShopError::CatalogUnavailable("search disabled".to_string()))
    })?;

    info!(query = %query.as_str(), "Search query");

    let products = catalog.fetch_products().await.map_err(|e| {
        error!("Error during search: {}", e);
        shop_error_to_response(ShopError::CatalogUnavailable(e.to_string()))
    })?;

    debug!(
        "Fetched {} products from {}",
        products.len(),
        catalog.provider_name()
    );

    let results = merge_results(&state.categories, &products, &query);

    if results.is_empty() {
        info!("No results found for the query");
    } else {
        info!("Filtered search results: {}", results.len());
    }

    Ok(Json(results))
}

/// Create a payment intent for `total` cents
#[instrument(skip(state, params), fields(total = ?params.first("total")))]
pub async fn create_payment(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<(StatusCode, Json<CreatePaymentResponse>), ApiError> {
    let currency = Currency::default();
    let amount = validate_total(parse_total(params.first("total")), currency)
        .map_err(shop_error_to_response)?;

    let intent = state
        .payments
        .create_payment_intent(amount, currency)
        .await
        .map_err(|e| {
            if e.is_upstream() {
                error!("Failed to create payment intent: {}", e);
            } else {
                warn!("Payment intent rejected: {}", e);
            }
            shop_error_to_response(e)
        })?;

    info!(
        "Created payment intent: id={}, amount={}, status={:?}, provider={}",
        intent.id,
        amount,
        intent.status,
        state.payments.provider_name()
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatePaymentResponse {
            client_secret: intent.client_secret,
        }),
    ))
}
