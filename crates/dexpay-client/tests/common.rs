//! Common test utilities for DexPay client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use dexpay_client::{DexPay, DexPayConfig};
use wiremock::MockServer;

pub const API_KEY: &str = "pk_test_123456789";
pub const API_SECRET: &str = "sk_test_123456789";

/// Path prefix the mock API is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Test harness: a mock DexPay API and a client pointed at it.
pub struct TestHarness {
    /// The mock server. Mount expectations on it.
    pub server: MockServer,
    /// Client configured against `server`.
    pub dexpay: DexPay,
}

impl TestHarness {
    /// Start a mock server and a client with the default timeout.
    pub async fn new() -> Self {
        Self::with_timeout_ms(None).await
    }

    /// Start a mock server and a client with a custom timeout.
    pub async fn with_timeout_ms(timeout_ms: Option<u64>) -> Self {
        let server = MockServer::start().await;

        let mut config = DexPayConfig::new(API_KEY, API_SECRET)
            .with_base_url(format!("{}{API_PREFIX}", server.uri()));
        config.timeout_ms = timeout_ms;

        let dexpay = DexPay::new(config).expect("Failed to create DexPay client");

        Self { server, dexpay }
    }

    /// Full mock path for an API path.
    pub fn path(api_path: &str) -> String {
        format!("{API_PREFIX}{api_path}")
    }

    /// Requests the mock server has seen so far.
    pub async fn received(&self) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is disabled")
    }
}
