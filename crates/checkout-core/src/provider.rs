//! # Checkout Provider Trait
//!
//! Seam between the HTTP surface and a payment processor adapter.
//! The gateway is a pass-through: every operation returns the provider's
//! resource as raw JSON, untouched, so the storefront sees exactly what
//! the processor answered.

use crate::error::GatewayResult;
use crate::order::OrderDraft;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Operations the gateway forwards to a payment processor.
///
/// Each call is a single stateless request/response round trip against the
/// provider's REST API; implementations own authentication.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create an order from a purchase draft.
    ///
    /// Returns the provider's order resource (id, status, links) unchanged.
    async fn create_order(&self, draft: &OrderDraft) -> GatewayResult<Value>;

    /// Capture payment for a previously created order.
    async fn capture_order(&self, order_id: &str) -> GatewayResult<Value>;

    /// Authorize payment for a previously created order.
    async fn authorize_order(&self, order_id: &str) -> GatewayResult<Value>;

    /// Capture a previously authorized payment.
    async fn capture_authorization(&self, authorization_id: &str) -> GatewayResult<Value>;

    /// Refund a captured payment.
    async fn refund_capture(&self, capture_id: &str) -> GatewayResult<Value>;

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed provider (dynamic dispatch)
pub type BoxedCheckoutProvider = Arc<dyn CheckoutProvider>;

/// URLs the provider redirects or calls back to during checkout
#[derive(Debug, Clone)]
pub struct CallbackUrls {
    /// Base URL of the storefront (e.g. "https://example.com")
    pub base_url: String,
    /// Return page path after buyer approval
    pub return_path: String,
    /// Cancel page path
    pub cancel_path: String,
    /// Shipping-callback path the provider pushes updates to
    pub callback_path: String,
}

impl CallbackUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            return_path: "/returnUrl".to_string(),
            cancel_path: "/cancelUrl".to_string(),
            callback_path: "/api/shipping-callback".to_string(),
        }
    }

    pub fn return_url(&self) -> String {
        format!("{}{}", self.base_url, self.return_path)
    }

    pub fn cancel_url(&self) -> String {
        format!("{}{}", self.base_url, self.cancel_path)
    }

    pub fn callback_url(&self) -> String {
        format!("{}{}", self.base_url, self.callback_path)
    }
}

impl Default for CallbackUrls {
    fn default() -> Self {
        Self::new("https://example.com")
    }
}
