//! # Application State
//!
//! Shared state for the axum application: the payment provider adapter,
//! the SKU price list, and server configuration.

use checkout_core::{BoxedCheckoutProvider, CallbackUrls, OrderIntent, PriceList};
use checkout_paypal::PayPalCheckout;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base URL the provider redirects and calls back to
    pub base_url: String,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Payment intent for new orders unless the request says otherwise
    pub default_intent: OrderIntent,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let default_intent = std::env::var("PAYPAL_ORDER_INTENT")
            .ok()
            .and_then(|value| OrderIntent::parse(&value))
            .unwrap_or_default();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            default_intent,
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider adapter
    pub provider: BoxedCheckoutProvider,
    /// SKU price list
    pub pricing: Arc<PriceList>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by the PayPal adapter
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let urls = CallbackUrls::new(&config.base_url);

        let pricing = load_price_list()?;

        let gateway = PayPalCheckout::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize PayPal adapter: {}", e))?
            .with_callback_urls(urls);

        Ok(Self {
            provider: Arc::new(gateway),
            pricing: Arc::new(pricing),
            config,
        })
    }

    /// Create an AppState around an arbitrary provider (used by tests)
    pub fn with_provider(provider: BoxedCheckoutProvider, pricing: PriceList) -> Self {
        Self {
            provider,
            pricing: Arc::new(pricing),
            config: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                base_url: "http://localhost:8080".to_string(),
                environment: "test".to_string(),
                default_intent: OrderIntent::Capture,
            },
        }
    }
}

/// Load the SKU price list from a config file
fn load_price_list() -> anyhow::Result<PriceList> {
    let config_paths = [
        "config/pricing.toml",
        "../config/pricing.toml",
        "../../config/pricing.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let pricing = PriceList::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded {} SKUs from {}", pricing.len(), path);
            return Ok(pricing);
        }
    }

    // Every cart prices at the fallback item without a list
    tracing::warn!("No price list found, carts will price at the fallback item");
    Ok(PriceList::new())
}
