//! # shop-stripe
//!
//! Stripe payment processor for storefront-rs.
//!
//! Creates one Stripe Payment Intent per call and hands back its client
//! secret. Amounts are in the smallest currency unit.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shop_core::{Currency, PaymentProcessor};
//! use shop_stripe::StripePaymentIntents;
//!
//! // Requires STRIPE_KEY in the environment
//! let processor = StripePaymentIntents::from_env()?;
//! let intent = processor.create_payment_intent(1000, Currency::USD).await?;
//!
//! // Hand intent.client_secret to the browser
//! ```

pub mod config;
pub mod intents;

// Re-exports
pub use config::{StripeConfig, STRIPE_KEY_VAR};
pub use intents::StripePaymentIntents;
