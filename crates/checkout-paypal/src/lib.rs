//! # checkout-paypal
//!
//! PayPal adapter for checkout-gateway-rs.
//!
//! This crate covers the outbound half of the gateway:
//!
//! 1. **OAuth client-credentials flow** - bearer token exchange against
//!    `/v1/oauth2/token`, cached until near expiry
//! 2. **Orders v2** - create, capture, and authorize orders
//! 3. **Payments v2** - capture authorizations and refund captures
//! 4. **Merchant auth assertion** - unsigned `header.payload.` token for
//!    partner/multiparty flows
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_paypal::PayPalCheckout;
//! use checkout_core::{CheckoutProvider, OrderDraft, OrderIntent, PriceList};
//!
//! // Create the adapter from environment
//! let gateway = PayPalCheckout::from_env()?;
//!
//! // Forward a purchase draft; the provider's order resource comes back
//! // as raw JSON, unchanged
//! let draft = OrderDraft::from_cart(&cart, &pricing, OrderIntent::Capture);
//! let order = gateway.create_order(&draft).await?;
//! ```

pub mod assertion;
pub mod client;
pub mod config;
pub mod oauth;
pub mod orders;

pub use assertion::auth_assertion;
pub use client::PayPalCheckout;
pub use config::PayPalConfig;
pub use oauth::{fetch_access_token, AccessToken, TokenCache};
pub use orders::build_order_payload;
