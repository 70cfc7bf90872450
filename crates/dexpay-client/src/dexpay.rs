//! Top-level DexPay client.

use std::sync::Arc;

use crate::client::HttpClient;
use crate::config::DexPayConfig;
use crate::error::ConfigError;
use crate::resources::{CheckoutSessions, Customers, Payouts, Products, Subscriptions};

/// DexPay API client.
///
/// Owns one [`HttpClient`] shared by every resource wrapper.
#[derive(Debug, Clone)]
pub struct DexPay {
    /// Hosted payment sessions.
    pub checkout_sessions: CheckoutSessions,
    /// Product catalog.
    pub products: Products,
    /// Customers.
    pub customers: Customers,
    /// Subscriptions.
    pub subscriptions: Subscriptions,
    /// Payouts (withdrawals).
    pub payouts: Payouts,
    client: Arc<HttpClient>,
}

impl DexPay {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key or secret is empty, or if the HTTP
    /// client cannot be built.
    pub fn new(config: DexPayConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let client = Arc::new(HttpClient::new(&config)?);

        tracing::debug!(
            base_url = %client.base_url(),
            timeout = ?client.timeout(),
            "DexPay client initialized"
        );

        Ok(Self {
            checkout_sessions: CheckoutSessions::new(Arc::clone(&client)),
            products: Products::new(Arc::clone(&client)),
            customers: Customers::new(Arc::clone(&client)),
            subscriptions: Subscriptions::new(Arc::clone(&client)),
            payouts: Payouts::new(Arc::clone(&client)),
            client,
        })
    }

    /// Create a client from `DEXPAY_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`DexPayConfig::from_env`] and [`DexPay::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(DexPayConfig::from_env()?)
    }

    /// The shared transport, for endpoints not wrapped by this crate.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.client
    }
}
