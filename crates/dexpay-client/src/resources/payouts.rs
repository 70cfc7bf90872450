//! Payout endpoints.
//!
//! Unlike the other resources, payout endpoints return the bare `Payout`
//! object rather than an `ApiResponse` envelope.

use std::sync::Arc;

use dexpay_core::{
    CancelPayoutParams, CreatePayoutParams, ListPayoutsParams,
    PaginatedResponse, Payout,
};

use super::segment;
use crate::client::HttpClient;
use crate::error::Result;

const COLLECTION: &str = "/payouts";

/// Withdrawals to mobile money wallets.
#[derive(Debug, Clone)]
pub struct Payouts {
    client: Arc<HttpClient>,
}

impl Payouts {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Create a payout.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(&self, params: &CreatePayoutParams) -> Result<Payout> {
        self.client.post(COLLECTION, params).await
    }

    /// Retrieve a payout by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn retrieve(&self, id: &str) -> Result<Payout> {
        self.client
            .get(&format!("{COLLECTION}/{}", segment(id)))
            .await
    }

    /// List payouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(&self, params: Option<&ListPayoutsParams>) -> Result<PaginatedResponse<Payout>> {
        self.client.get_with_query(COLLECTION, params).await
    }

    /// Cancel a payout. Only `PENDING` payouts can be cancelled; the server
    /// rejects the rest with an API error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn cancel(&self, id: &str, reason: Option<&str>) -> Result<Payout> {
        let body = CancelPayoutParams {
            reason: reason.map(str::to_string),
        };

        self.client
            .post(&format!("{COLLECTION}/{}/cancel", segment(id)), &body)
            .await
    }
}
