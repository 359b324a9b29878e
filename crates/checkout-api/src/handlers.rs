//! # Request Handlers
//!
//! Axum request handlers for the gateway API. Each handler is a thin
//! translation: parse the storefront request, forward one operation to the
//! provider adapter, and hand the provider's JSON back unchanged.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use checkout_core::{parse_cart, GatewayError, OrderDraft, OrderIntent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create order request
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Storefront cart, arbitrary JSON; `{sku, qty}` entries are priced
    #[serde(default)]
    pub cart: Value,
    /// Optional intent override (`CAPTURE` or `AUTHORIZE`)
    #[serde(default)]
    pub intent: Option<String>,
}

/// Refund request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    /// Id of the captured payment to refund
    #[serde(default)]
    pub captured_payment_id: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn gateway_error_to_response(err: GatewayError) -> HandlerError {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "checkout-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create an order from the storefront cart
#[instrument(skip(state, request))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<Value>, HandlerError> {
    let intent = match request.intent.as_deref() {
        None => state.config.default_intent,
        Some(raw) => OrderIntent::parse(raw).ok_or_else(|| {
            gateway_error_to_response(GatewayError::InvalidRequest(format!(
                "Unknown intent: {}",
                raw
            )))
        })?,
    };

    let cart = parse_cart(&request.cart);
    if cart.is_empty() && !request.cart.is_null() {
        warn!("Cart did not contain any priceable entries, using fallback item");
    }

    let draft = OrderDraft::from_cart(&cart, &state.pricing, intent);

    info!(
        "Creating order: intent={}, {} items, total={}",
        draft.intent,
        draft.item_count(),
        draft.item_total().value_string()
    );

    let order = state.provider.create_order(&draft).await.map_err(|e| {
        error!("Failed to create order: {}", e);
        gateway_error_to_response(e)
    })?;

    Ok(Json(order))
}

/// Capture payment for an order
#[instrument(skip(state), fields(order_id = %order_id))]
pub async fn capture_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, HandlerError> {
    let captured = state.provider.capture_order(&order_id).await.map_err(|e| {
        error!("Failed to capture order: {}", e);
        gateway_error_to_response(e)
    })?;

    Ok(Json(captured))
}

/// Authorize payment for an order
#[instrument(skip(state), fields(order_id = %order_id))]
pub async fn authorize_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, HandlerError> {
    let authorized = state.provider.authorize_order(&order_id).await.map_err(|e| {
        error!("Failed to authorize order: {}", e);
        gateway_error_to_response(e)
    })?;

    Ok(Json(authorized))
}

/// Capture a previously authorized payment
#[instrument(skip(state), fields(authorization_id = %authorization_id))]
pub async fn capture_authorization(
    State(state): State<AppState>,
    Path(authorization_id): Path<String>,
) -> Result<Json<Value>, HandlerError> {
    let captured = state
        .provider
        .capture_authorization(&authorization_id)
        .await
        .map_err(|e| {
            error!("Failed to capture authorization: {}", e);
            gateway_error_to_response(e)
        })?;

    Ok(Json(captured))
}

/// Refund a captured payment
#[instrument(skip(state, request))]
pub async fn refund_capture(
    State(state): State<AppState>,
    Json(request): Json<RefundRequest>,
) -> Result<Json<Value>, HandlerError> {
    let capture_id = request.captured_payment_id.as_deref().ok_or_else(|| {
        gateway_error_to_response(GatewayError::InvalidRequest(
            "Missing capturedPaymentId".to_string(),
        ))
    })?;

    let refund = state.provider.refund_capture(capture_id).await.map_err(|e| {
        error!("Failed to refund captured payment: {}", e);
        gateway_error_to_response(e)
    })?;

    Ok(Json(refund))
}

/// Provider-pushed shipping address/option update.
///
/// The sample gateway acknowledges the callback without recalculating
/// anything; the provider keeps the original amounts.
#[instrument(skip(payload))]
pub async fn shipping_callback(Json(payload): Json<Value>) -> impl IntoResponse {
    info!(
        "Shipping callback received: order={}",
        payload["id"].as_str().unwrap_or("?")
    );
    Json(serde_json::json!({}))
}
