//! # shop-api
//!
//! HTTP API layer for storefront-rs.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Health check |
//! | GET | `/api/search?query=` | Search categories and products |
//! | POST | `/payment/create?total=` | Create payment intent |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, LogFormat};
