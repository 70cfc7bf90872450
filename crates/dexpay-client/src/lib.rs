//! DexPay Client SDK.
//!
//! This crate provides a typed client for the DexPay payment API: checkout
//! sessions, products, customers, subscriptions and payouts.
//!
//! # Example
//!
//! ```no_run
//! use dexpay_client::{CreateCheckoutSessionParams, Currency, DexPay, DexPayConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dexpay = DexPay::new(DexPayConfig::new("pk_test_xxx", "sk_test_xxx"))?;
//!
//! let session = dexpay
//!     .checkout_sessions
//!     .create(&CreateCheckoutSessionParams {
//!         reference: "ORDER_123".to_string(),
//!         item_name: "Premium Plan".to_string(),
//!         amount: 10_000,
//!         currency: Currency::Xof,
//!         success_url: "https://example.com/success".to_string(),
//!         failure_url: "https://example.com/cancel".to_string(),
//!         webhook_url: "https://example.com/webhook".to_string(),
//!         metadata: None,
//!         expires_at: None,
//!     })
//!     .await?;
//!
//! if let Some(url) = session.data.and_then(|s| s.payment_url) {
//!     println!("Pay at {url}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every request returns [`DexPayError`]. Inspect [`DexPayError::code`] and
//! [`DexPayError::status_code`] to tell validation errors from timeouts.
//! Nothing is retried automatically.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod dexpay;
mod error;
pub mod resources;

pub use client::{HttpClient, API_KEY_HEADER, API_SECRET_HEADER};
pub use config::{DexPayConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use dexpay::DexPay;
pub use error::{
    ConfigError, DexPayError, Result, DEFAULT_API_ERROR_MESSAGE, NETWORK_ERROR_CODE,
    TIMEOUT_CODE, UNKNOWN_ERROR_CODE,
};
pub use dexpay_core::*;
