//! # PayPal Checkout Client
//!
//! `CheckoutProvider` implementation over the PayPal Orders v2 and
//! Payments v2 REST APIs. Every operation is one authenticated POST whose
//! JSON response is handed back to the caller untouched; non-2xx answers
//! surface as `GatewayError::Upstream` with the raw body attached.

use crate::assertion::auth_assertion;
use crate::config::PayPalConfig;
use crate::oauth::TokenCache;
use crate::orders::build_order_payload;
use async_trait::async_trait;
use checkout_core::{
    CallbackUrls, CheckoutProvider, GatewayError, GatewayResult, OrderDraft,
};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

const PREFER_REPRESENTATION: &str = "return=representation";
const PREFER_MINIMAL: &str = "return=minimal";

/// PayPal checkout adapter
pub struct PayPalCheckout {
    config: PayPalConfig,
    client: Client,
    tokens: TokenCache,
    urls: CallbackUrls,
}

impl PayPalCheckout {
    /// Create a new adapter from explicit configuration
    pub fn new(config: PayPalConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            tokens: TokenCache::new(),
            urls: CallbackUrls::default(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        let config = PayPalConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Builder: set the storefront return/cancel/callback URLs
    pub fn with_callback_urls(mut self, urls: CallbackUrls) -> Self {
        self.urls = urls;
        self
    }

    /// Authenticated POST against the provider API.
    ///
    /// Attaches the bearer token (cache-aware), the merchant auth
    /// assertion when a partner merchant is configured, and optionally the
    /// partner attribution code.
    async fn post(
        &self,
        path: &str,
        body: Value,
        prefer: &'static str,
        attribution: bool,
    ) -> GatewayResult<Value> {
        let bearer = self.tokens.bearer(&self.client, &self.config).await?;
        let url = format!("{}{}", self.config.api_base_url, path);

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(bearer)
            .header("Prefer", prefer)
            .json(&body);

        if let Some(ref merchant) = self.config.merchant_payer_id {
            request = request.header(
                "PayPal-Auth-Assertion",
                auth_assertion(&self.config.client_id, merchant),
            );
        }
        if attribution {
            if let Some(ref bn_code) = self.config.bn_code {
                request = request.header("PayPal-Partner-Attribution-Id", bn_code);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("PayPal API error: status={}, body={}", status, text);
            return Err(GatewayError::upstream(status.as_u16(), text));
        }

        // return=minimal answers can come back with an empty body
        if text.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        serde_json::from_str(&text).map_err(|e| {
            GatewayError::Serialization(format!("Failed to parse provider response: {}", e))
        })
    }
}

#[async_trait]
impl CheckoutProvider for PayPalCheckout {
    #[instrument(skip(self, draft), fields(intent = %draft.intent, items = draft.items.len()))]
    async fn create_order(&self, draft: &OrderDraft) -> GatewayResult<Value> {
        let payload = build_order_payload(
            draft,
            &self.urls,
            self.config.merchant_payer_id.as_deref(),
        );
        let body = serde_json::to_value(&payload)
            .map_err(|e| GatewayError::Serialization(e.to_string()))?;

        debug!(
            "Creating order: total={} {}",
            draft.item_total().value_string(),
            draft.currency
        );

        let order = self
            .post("/v2/checkout/orders", body, PREFER_REPRESENTATION, true)
            .await?;

        info!(
            "Created order: id={}, status={}",
            order["id"].as_str().unwrap_or("?"),
            order["status"].as_str().unwrap_or("?"),
        );

        Ok(order)
    }

    #[instrument(skip(self))]
    async fn capture_order(&self, order_id: &str) -> GatewayResult<Value> {
        self.post(
            &format!("/v2/checkout/orders/{}/capture", order_id),
            Value::Object(serde_json::Map::new()),
            PREFER_MINIMAL,
            false,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn authorize_order(&self, order_id: &str) -> GatewayResult<Value> {
        self.post(
            &format!("/v2/checkout/orders/{}/authorize", order_id),
            Value::Object(serde_json::Map::new()),
            PREFER_MINIMAL,
            false,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn capture_authorization(&self, authorization_id: &str) -> GatewayResult<Value> {
        self.post(
            &format!("/v2/payments/authorizations/{}/capture", authorization_id),
            serde_json::json!({ "final_capture": false }),
            PREFER_MINIMAL,
            false,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn refund_capture(&self, capture_id: &str) -> GatewayResult<Value> {
        self.post(
            &format!("/v2/payments/captures/{}/refund", capture_id),
            Value::Object(serde_json::Map::new()),
            PREFER_MINIMAL,
            false,
        )
        .await
    }

    fn provider_name(&self) -> &'static str {
        "paypal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::{CartItem, OrderIntent, PriceList};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_token(server: &MockServer, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "A21AAtest-token",
                "token_type": "Bearer",
                "expires_in": 32400
            })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    fn gateway(server: &MockServer) -> PayPalCheckout {
        let config = PayPalConfig::new("client-id", "client-secret")
            .with_api_base_url(server.uri());
        PayPalCheckout::new(config)
    }

    fn sample_draft() -> OrderDraft {
        let cart = vec![CartItem {
            sku: "sku01".into(),
            quantity: 1,
        }];
        OrderDraft::from_cart(&cart, &PriceList::new(), OrderIntent::Capture)
    }

    #[tokio::test]
    async fn test_create_order_passes_provider_body_through() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;

        let order_body = json!({ "id": "5O190127TN364715T", "status": "CREATED" });
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders"))
            .and(header("authorization", "Bearer A21AAtest-token"))
            .and(header("prefer", "return=representation"))
            .and(body_string_contains("purchase_units"))
            .respond_with(ResponseTemplate::new(201).set_body_json(order_body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let order = gateway(&server).create_order(&sample_draft()).await.unwrap();

        // Passed through unchanged; the expect counts on the mocks verify
        // exactly one token request followed by one order-create request
        assert_eq!(order, order_body);
    }

    #[tokio::test]
    async fn test_create_order_upstream_failure() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"name": "UNPROCESSABLE_ENTITY"})),
            )
            .mount(&server)
            .await;

        let err = gateway(&server).create_order(&sample_draft()).await.unwrap_err();

        assert_eq!(err.upstream_status(), Some(422));
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("UNPROCESSABLE_ENTITY"));
    }

    #[tokio::test]
    async fn test_capture_unknown_order_is_upstream_404() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/BAD-ID/capture"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"name": "RESOURCE_NOT_FOUND"})),
            )
            .mount(&server)
            .await;

        let err = gateway(&server).capture_order("BAD-ID").await.unwrap_err();

        assert_eq!(err.upstream_status(), Some(404));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_token_reused_across_calls() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/5O190127TN364715T/capture"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"status": "COMPLETED"})))
            .expect(2)
            .mount(&server)
            .await;

        let gateway = gateway(&server);
        gateway.capture_order("5O190127TN364715T").await.unwrap();
        gateway.capture_order("5O190127TN364715T").await.unwrap();
        // Token mock expects exactly one hit for the two captures
    }

    #[tokio::test]
    async fn test_merchant_assertion_header_attached() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;

        Mock::given(method("POST"))
            .and(path("/v2/payments/captures/2GG279541U471931P/refund"))
            .and(header_exists("paypal-auth-assertion"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"status": "COMPLETED"})))
            .expect(1)
            .mount(&server)
            .await;

        let config = PayPalConfig::new("client-id", "client-secret")
            .with_api_base_url(server.uri())
            .with_merchant_payer_id("SELLER123");
        let gateway = PayPalCheckout::new(config);

        gateway.refund_capture("2GG279541U471931P").await.unwrap();
    }

    #[tokio::test]
    async fn test_attribution_code_attached_on_create() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders"))
            .and(header("paypal-partner-attribution-id", "TEST-BN-CODE"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"status": "CREATED"})))
            .expect(1)
            .mount(&server)
            .await;

        let config = PayPalConfig::new("client-id", "client-secret")
            .with_api_base_url(server.uri())
            .with_bn_code("TEST-BN-CODE");
        let gateway = PayPalCheckout::new(config);

        gateway.create_order(&sample_draft()).await.unwrap();
    }

    #[tokio::test]
    async fn test_capture_authorization_sends_final_capture_flag() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;

        Mock::given(method("POST"))
            .and(path("/v2/payments/authorizations/0VF52814937998046/capture"))
            .and(body_string_contains("final_capture"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"status": "COMPLETED"})))
            .expect(1)
            .mount(&server)
            .await;

        gateway(&server)
            .capture_authorization("0VF52814937998046")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_minimal_body_yields_empty_object() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/5O190127TN364715T/authorize"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let result = gateway(&server)
            .authorize_order("5O190127TN364715T")
            .await
            .unwrap();

        assert_eq!(result, json!({}));
    }
}
