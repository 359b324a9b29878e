//! # Checkout Gateway
//!
//! Stateless translator between a storefront and the payment processor's
//! checkout API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export PAYPAL_CLIENT_ID=...
//! export PAYPAL_CLIENT_SECRET=...
//!
//! # Run the server
//! checkout-gateway
//! ```

use checkout_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider.provider_name());
    info!("Default intent: {}", state.config.default_intent);
    info!("SKUs priced: {}", state.pricing.len());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Checkout gateway starting on http://{}", addr);

    if !is_prod {
        info!("Create order: POST http://{}/api/orders", addr);
        info!("Capture:      POST http://{}/api/orders/{{id}}/capture", addr);
        info!("Refund:       POST http://{}/api/payments/refund", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
