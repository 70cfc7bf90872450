//! Checkout session endpoints.

use std::sync::Arc;

use dexpay_core::{
    ApiResponse, CheckoutSession, CreateCheckoutSessionParams,
    CreatePaymentAttemptParams, ListParams, PaginatedResponse, PaymentAttempt,
};

use super::segment;
use crate::client::HttpClient;
use crate::error::Result;

const COLLECTION: &str = "/checkout-sessions";

/// Hosted payment sessions.
#[derive(Debug, Clone)]
pub struct CheckoutSessions {
    client: Arc<HttpClient>,
}

impl CheckoutSessions {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Create a checkout session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(
        &self,
        params: &CreateCheckoutSessionParams,
    ) -> Result<ApiResponse<CheckoutSession>> {
        self.client.post(COLLECTION, params).await
    }

    /// Retrieve a session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn retrieve(&self, id: &str) -> Result<CheckoutSession> {
        self.client
            .get(&format!("{COLLECTION}/{}", segment(id)))
            .await
    }

    /// Retrieve a session by the merchant order reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn retrieve_by_reference(&self, reference: &str) -> Result<CheckoutSession> {
        self.client
            .get(&format!("{COLLECTION}/reference/{}", segment(reference)))
            .await
    }

    /// List sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(
        &self,
        params: Option<&ListParams>,
    ) -> Result<PaginatedResponse<CheckoutSession>> {
        self.client.get_with_query(COLLECTION, params).await
    }

    /// Start a payment attempt on the session identified by `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_payment_attempt(
        &self,
        reference: &str,
        params: &CreatePaymentAttemptParams,
    ) -> Result<ApiResponse<PaymentAttempt>> {
        self.client
            .post(
                &format!("{COLLECTION}/{}/transaction-attempt", segment(reference)),
                params,
            )
            .await
    }

    /// Cancel a session (soft delete, server side).
    ///
    /// The response body is read but not returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn cancel(&self, id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .client
            .delete(&format!("{COLLECTION}/{}", segment(id)))
            .await?;
        Ok(())
    }
}
