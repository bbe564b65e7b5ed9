//! # Stripe Payment Intents
//!
//! Implementation of the Stripe Payment Intents API.
//! The returned client secret lets a client-side SDK confirm the charge.

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use shop_core::{Currency, PaymentIntent, PaymentProcessor, ShopError, ShopResult};
use tracing::{debug, error, info, instrument};

/// Stripe payment-intent processor
pub struct StripePaymentIntents {
    config: StripeConfig,
    client: Client,
}

impl StripePaymentIntents {
    /// Create a new processor with its own HTTP client
    pub fn new(config: StripeConfig) -> ShopResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ShopError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> ShopResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    fn provider_error(message: impl Into<String>) -> ShopError {
        ShopError::Processor {
            provider: "stripe".to_string(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl PaymentProcessor for StripePaymentIntents {
    #[instrument(skip(self, currency), fields(currency = %currency))]
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: Currency,
    ) -> ShopResult<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.config.api_base_url);
        let form_params = [
            ("amount", amount.to_string()),
            ("currency", currency.as_str().to_string()),
        ];

        debug!("Creating Stripe payment intent: amount={}", amount);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| ShopError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ShopError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(Self::provider_error(error_response.error.message));
            }

            return Err(Self::provider_error(format!("HTTP {}: {}", status, body)));
        }

        let intent: StripePaymentIntentResponse = serde_json::from_str(&body).map_err(|e| {
            ShopError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })?;

        info!("Created Stripe payment intent: id={}", intent.id);

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
            amount: intent.amount.unwrap_or(amount),
            currency,
            status: intent.status,
            created_at: intent.created.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripePaymentIntentResponse {
    id: String,
    client_secret: String,
    #[serde(default)]
    amount: Option<i64>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    created: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}
