//! # Storefront RS
//!
//! Product search and payment-intent service.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_KEY=sk_test_...
//!
//! # Run the server
//! storefront
//! ```

use shop_api::{routes, AppConfig, AppState, LogFormat};
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    init_tracing(config.log_format);

    let addr = config.socket_addr()?;
    let is_prod = config.is_production();

    // Missing STRIPE_KEY stops here, before anything is bound
    let state = AppState::new(config).map_err(|e| {
        error!("Startup failed: {:#}", e);
        e
    })?;

    info!("Environment: {}", state.config.environment);
    info!("Categories loaded: {}", state.categories.len());
    info!("Payment processor: {}", state.payments.provider_name());
    info!("Search enabled: {}", state.search_enabled());

    let app = routes::create_router(state);

    info!("Storefront starting on http://{}", addr);

    if !is_prod {
        info!("Health: GET http://{}/", addr);
        info!("Payment: POST http://{}/payment/create?total=1000", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
        LogFormat::Plain => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }
}
