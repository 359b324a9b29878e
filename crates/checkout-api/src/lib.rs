//! # checkout-api
//!
//! HTTP API layer for checkout-gateway-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints forwarding checkout operations to the provider
//! - The shipping-callback acknowledgement endpoint
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/orders` | Create order |
//! | POST | `/api/orders/{id}/capture` | Capture order |
//! | POST | `/api/orders/{id}/authorize` | Authorize order |
//! | POST | `/api/orders/{id}/captureAuthorize` | Capture authorization |
//! | POST | `/api/payments/refund` | Refund captured payment |
//! | POST | `/api/shipping-callback` | Provider shipping callback |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
