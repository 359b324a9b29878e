//! # Gateway Error Types
//!
//! Typed error handling for the checkout gateway.
//! All gateway operations return `Result<T, GatewayError>`.

use thiserror::Error;

/// Core error type for all gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration errors (missing credentials, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data from the storefront
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Non-2xx response from the payment provider, carrying the raw body
    #[error("Upstream error: provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GatewayError {
    /// Build an upstream error from a provider status code and body
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        GatewayError::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Returns the upstream HTTP status this error wraps, if any
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GatewayError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the HTTP status code the gateway should answer with.
    ///
    /// Provider failures collapse to 500 regardless of the upstream
    /// status; only malformed storefront input gets a 4xx.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::InvalidRequest(_) => 400,
            GatewayError::Configuration(_)
            | GatewayError::Upstream { .. }
            | GatewayError::Network(_)
            | GatewayError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
