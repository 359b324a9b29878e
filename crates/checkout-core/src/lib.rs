//! # checkout-core
//!
//! Core types and traits for the checkout-gateway-rs adapter.
//!
//! This crate provides:
//! - `CheckoutProvider` trait for implementing payment processor adapters
//! - `OrderDraft`, `CartItem`, and cart parsing for the create-order flow
//! - `PriceList` for SKU pricing
//! - `Money` and `Currency` for wire-format amounts
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{parse_cart, OrderDraft, OrderIntent, PriceList};
//!
//! // Parse the storefront cart out of the request body
//! let cart = parse_cart(&body["cart"]);
//!
//! // Price it into a purchase draft
//! let draft = OrderDraft::from_cart(&cart, &pricing, OrderIntent::Capture);
//!
//! // Forward to the provider and pass the order resource through
//! let order = provider.create_order(&draft).await?;
//! ```

pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod provider;

// Re-exports for convenience
pub use error::{GatewayError, GatewayResult};
pub use money::{Currency, Money};
pub use order::{parse_cart, CartItem, DraftItem, OrderDraft, OrderIntent, ShippingChoice};
pub use pricing::{ListedItem, PriceList};
pub use provider::{BoxedCheckoutProvider, CallbackUrls, CheckoutProvider};
