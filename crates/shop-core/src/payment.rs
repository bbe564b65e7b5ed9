//! # Payment Types
//!
//! Amount parsing and validation, the payment intent model, and the
//! `PaymentProcessor` seam implemented by provider crates.
//!
//! There is no idempotency key on intent creation: a client that retries
//! `POST /payment/create` gets a second intent.

use crate::error::{ShopError, ShopResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Returns the ISO 4217 currency code as the processor expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "usd",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }

    /// Smallest amount the processor will charge, in the smallest unit
    pub fn minimum_charge(&self) -> i64 {
        match self {
            Currency::USD => 50,
        }
    }

    /// Minimum charge for messages (e.g., "$0.50 USD")
    pub fn minimum_display(&self) -> String {
        let minimum = self.minimum_charge();
        format!(
            "{}{}.{:02} {}",
            self.symbol(),
            minimum / 100,
            minimum % 100,
            self
        )
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Parse the `total` parameter the way a lenient base-10 integer parse does:
/// skip leading whitespace, accept one sign, then read digits until the first
/// non-digit. `None` means "not a number".
pub fn parse_total(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end].bytes().fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}

/// Check a parsed total against the minimum charge.
///
/// A missing or non-numeric total is neither below the minimum nor positive,
/// so it lands on the non-positive guard. Numeric totals under the minimum,
/// zero and negatives included, fail the minimum check first.
pub fn validate_total(total: Option<i64>, currency: Currency) -> ShopResult<i64> {
    match total {
        None => Err(ShopError::NonPositiveTotal),
        Some(t) if t < currency.minimum_charge() => Err(ShopError::BelowMinimum {
            minimum: currency.minimum_display(),
        }),
        Some(t) if t > 0 => Ok(t),
        Some(_) => Err(ShopError::NonPositiveTotal),
    }
}

/// A payment intent created by a processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Processor's intent ID (e.g., "pi_...")
    pub id: String,

    /// Secret handed to the client SDK to complete the charge
    pub client_secret: String,

    /// Amount in smallest currency unit
    pub amount: i64,

    pub currency: Currency,

    /// Processor status (e.g., "requires_payment_method")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Core trait for payment processor implementations.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Create one payment intent for `amount` (smallest unit) in `currency`.
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: Currency,
    ) -> ShopResult<PaymentIntent>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment processor (dynamic dispatch)
pub type BoxedPaymentProcessor = Arc<dyn PaymentProcessor>;
