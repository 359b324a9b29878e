//! # PayPal Configuration
//!
//! Configuration management for the PayPal integration.
//! All secrets are loaded from environment variables.

use checkout_core::GatewayError;
use std::env;

/// Default REST API base (sandbox)
pub const SANDBOX_API_BASE_URL: &str = "https://api-m.sandbox.paypal.com";

/// Live REST API base
pub const LIVE_API_BASE_URL: &str = "https://api-m.paypal.com";

/// PayPal API configuration
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    /// OAuth client id
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// REST API base URL (sandbox by default, overridable for testing)
    pub api_base_url: String,

    /// Merchant payer id for partner/multiparty flows.
    /// When set, outbound calls carry a `PayPal-Auth-Assertion` header.
    pub merchant_payer_id: Option<String>,

    /// Partner attribution (BN) code, attached on order creation
    pub bn_code: Option<String>,
}

impl PayPalConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAYPAL_CLIENT_ID`
    /// - `PAYPAL_CLIENT_SECRET`
    ///
    /// Optional:
    /// - `PAYPAL_API_BASE_URL` (defaults to the sandbox)
    /// - `PAYPAL_MERCHANT_PAYER_ID`
    /// - `PAYPAL_BN_CODE`
    pub fn from_env() -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let client_id = env::var("PAYPAL_CLIENT_ID").map_err(|_| {
            GatewayError::Configuration("PAYPAL_CLIENT_ID not set".to_string())
        })?;

        let client_secret = env::var("PAYPAL_CLIENT_SECRET").map_err(|_| {
            GatewayError::Configuration("PAYPAL_CLIENT_SECRET not set".to_string())
        })?;

        let api_base_url = env::var("PAYPAL_API_BASE_URL")
            .unwrap_or_else(|_| SANDBOX_API_BASE_URL.to_string());

        let config = Self {
            client_id,
            client_secret,
            api_base_url,
            merchant_payer_id: env::var("PAYPAL_MERCHANT_PAYER_ID").ok(),
            bn_code: env::var("PAYPAL_BN_CODE").ok(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Create config with explicit values (for testing)
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_base_url: SANDBOX_API_BASE_URL.to_string(),
            merchant_payer_id: None,
            bn_code: None,
        }
    }

    /// Both credentials must be non-empty before any token exchange
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.client_id.trim().is_empty() {
            return Err(GatewayError::Configuration(
                "PAYPAL_CLIENT_ID is empty".to_string(),
            ));
        }
        if self.client_secret.trim().is_empty() {
            return Err(GatewayError::Configuration(
                "PAYPAL_CLIENT_SECRET is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Check if pointed at the sandbox
    pub fn is_sandbox(&self) -> bool {
        self.api_base_url == SANDBOX_API_BASE_URL
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: act on behalf of a partner merchant
    pub fn with_merchant_payer_id(mut self, payer_id: impl Into<String>) -> Self {
        self.merchant_payer_id = Some(payer_id.into());
        self
    }

    /// Builder: set the partner attribution code
    pub fn with_bn_code(mut self, bn_code: impl Into<String>) -> Self {
        self.bn_code = Some(bn_code.into());
        self
    }
}
