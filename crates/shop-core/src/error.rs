//! # Storefront Error Types
//!
//! Typed error handling for the storefront service.
//! All search and payment operations return `Result<T, ShopError>`.

use thiserror::Error;

/// Message returned to clients for any catalog failure during a search.
pub const SEARCH_FAILED_MESSAGE: &str = "An error occurred while searching";

/// Core error type for all storefront operations
#[derive(Debug, Error)]
pub enum ShopError {
    /// Configuration errors (missing keys, unreadable files)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Search request without a usable query
    #[error("Search query is required")]
    MissingQuery,

    /// Payment amount under the processor's minimum charge
    #[error("Amount must be at least {minimum}")]
    BelowMinimum { minimum: String },

    /// Payment total that is zero or negative
    #[error("Total must be greater than 0")]
    NonPositiveTotal,

    /// Catalog provider could not be reached or returned garbage
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Payment processor rejected the request
    #[error("Processor error [{provider}]: {message}")]
    Processor { provider: String, message: String },

    /// Network/HTTP error communicating with an upstream
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ShopError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ShopError::Configuration(_) => 500,
            ShopError::MissingQuery => 400,
            ShopError::BelowMinimum { .. } => 400,
            ShopError::NonPositiveTotal => 403,
            ShopError::CatalogUnavailable(_) => 500,
            ShopError::Processor { .. } => 500,
            ShopError::Network(_) => 500,
            ShopError::Serialization(_) => 500,
        }
    }

    /// The message shown to API clients.
    ///
    /// Processor errors pass the upstream message through untouched; catalog
    /// failures collapse into one generic message.
    pub fn public_message(&self) -> String {
        match self {
            ShopError::Processor { message, .. } => message.clone(),
            ShopError::Network(message) => message.clone(),
            ShopError::CatalogUnavailable(_) => SEARCH_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Returns true if the failure came from an external collaborator
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ShopError::CatalogUnavailable(_)
                | ShopError::Processor { .. }
                | ShopError::Network(_)
                | ShopError::Serialization(_)
        )
    }
}

/// Result type alias for storefront operations
pub type ShopResult<T> = Result<T, ShopError>;
