//! # OAuth Client-Credentials Flow
//!
//! Bearer token exchange against `/v1/oauth2/token`, with near-expiry
//! caching so concurrent requests share one token instead of hammering
//! the token endpoint once per inbound call.

use crate::config::PayPalConfig;
use checkout_core::{GatewayError, GatewayResult};
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, error};

/// Refresh this many seconds before the provider-reported expiry
const EXPIRY_SLACK_SECS: i64 = 60;

/// Token endpoint response
#[derive(Debug, Deserialize)]
pub struct AccessToken {
    /// The bearer credential
    #[serde(default)]
    pub access_token: String,

    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Shared bearer-token cache.
///
/// Holds at most one token; a token is reused until `expires_in` minus a
/// slack window has elapsed, then refetched.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a valid bearer token, fetching a fresh one if the cached
    /// token is absent or near expiry.
    pub async fn bearer(&self, client: &Client, config: &PayPalConfig) -> GatewayResult<String> {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.expires_at > Utc::now() {
                debug!("Reusing cached access token");
                return Ok(cached.token.clone());
            }
        }

        let fresh = fetch_access_token(client, config).await?;
        let ttl = (fresh.expires_in - EXPIRY_SLACK_SECS).max(0);
        *slot = Some(CachedToken {
            token: fresh.access_token.clone(),
            expires_at: Utc::now() + Duration::seconds(ttl),
        });

        Ok(fresh.access_token)
    }
}

/// Generate an OAuth 2.0 access token via the client-credentials grant.
///
/// Credentials are checked before any network call; the client id and
/// secret travel as HTTP Basic auth with a `grant_type=client_credentials`
/// form body.
pub async fn fetch_access_token(
    client: &Client,
    config: &PayPalConfig,
) -> GatewayResult<AccessToken> {
    config.validate()?;

    let url = format!("{}/v1/oauth2/token", config.api_base_url);

    let response = client
        .post(&url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| GatewayError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GatewayError::Network(e.to_string()))?;

    if !status.is_success() {
        error!("Token endpoint error: status={}, body={}", status, body);
        return Err(GatewayError::upstream(status.as_u16(), body));
    }

    let token: AccessToken = serde_json::from_str(&body)
        .map_err(|_| GatewayError::upstream(status.as_u16(), body.clone()))?;

    // A 2xx without a usable token is still an upstream failure
    if token.access_token.is_empty() {
        return Err(GatewayError::upstream(status.as_u16(), body));
    }

    debug!("Fetched access token, expires_in={}s", token.expires_in);
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn token_body() -> serde_json::Value {
        json!({
            "scope": "https://uri.paypal.com/services/payments/payment",
            "access_token": "A21AAtest-token",
            "token_type": "Bearer",
            "expires_in": 32400
        })
    }

    #[tokio::test]
    async fn test_fetch_token_uses_basic_auth_and_form_grant() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .and(header_exists("authorization"))
            .and(body_string("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .expect(1)
            .mount(&server)
            .await;

        let config = PayPalConfig::new("id", "secret").with_api_base_url(server.uri());
        let token = fetch_access_token(&Client::new(), &config).await.unwrap();

        assert_eq!(token.access_token, "A21AAtest-token");
        assert_eq!(token.expires_in, 32400);
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_any_network_call() {
        // No server is listening here; a network attempt would error
        // differently than the configuration check.
        let config =
            PayPalConfig::new("", "").with_api_base_url("http://127.0.0.1:1".to_string());
        let err = fetch_access_token(&Client::new(), &config).await.unwrap_err();

        assert!(matches!(err, GatewayError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_non_2xx_token_response_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_client"})),
            )
            .mount(&server)
            .await;

        let config = PayPalConfig::new("id", "bad-secret").with_api_base_url(server.uri());
        let err = fetch_access_token(&Client::new(), &config).await.unwrap_err();

        assert_eq!(err.upstream_status(), Some(401));
    }

    #[tokio::test]
    async fn test_2xx_without_token_field_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"scope": "none"})))
            .mount(&server)
            .await;

        let config = PayPalConfig::new("id", "secret").with_api_base_url(server.uri());
        let err = fetch_access_token(&Client::new(), &config).await.unwrap_err();

        assert_eq!(err.upstream_status(), Some(200));
    }

    #[tokio::test]
    async fn test_cache_reuses_token_until_expiry() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .expect(1)
            .mount(&server)
            .await;

        let config = PayPalConfig::new("id", "secret").with_api_base_url(server.uri());
        let client = Client::new();
        let cache = TokenCache::new();

        let first = cache.bearer(&client, &config).await.unwrap();
        let second = cache.bearer(&client, &config).await.unwrap();

        assert_eq!(first, second);
        // expect(1) on the mock verifies only one token request went out
    }
}
