//! # Routes
//!
//! Axum router configuration for the gateway API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST /api/orders - Create order from the storefront cart
/// - POST /api/orders/{id}/capture - Capture an order
/// - POST /api/orders/{id}/authorize - Authorize an order
/// - POST /api/orders/{id}/captureAuthorize - Capture an authorization (id is the authorization id)
/// - POST /api/payments/refund - Refund a captured payment
/// - POST /api/shipping-callback - Provider shipping callback
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - the sample storefront may be served elsewhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The router requires one parameter name per segment position, so the
    // authorization-id route shares `{id}` with the order routes
    let api_routes = Router::new()
        .route("/orders", post(handlers::create_order))
        .route("/orders/{id}/capture", post(handlers::capture_order))
        .route("/orders/{id}/authorize", post(handlers::authorize_order))
        .route(
            "/orders/{id}/captureAuthorize",
            post(handlers::capture_authorization),
        )
        .route("/payments/refund", post(handlers::refund_capture))
        .route("/shipping-callback", post(handlers::shipping_callback));

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // Checkout API
        .nest("/api", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
