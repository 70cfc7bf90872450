//! Subscription endpoints.

use std::sync::Arc;

use dexpay_core::{
    ApiResponse, CreateSubscriptionParams, DeletedResource,
    ListSubscriptionsParams, PaginatedResponse, Subscription,
};

use super::segment;
use crate::client::HttpClient;
use crate::error::Result;

const COLLECTION: &str = "/subscriptions";

/// Recurring billing of customers.
#[derive(Debug, Clone)]
pub struct Subscriptions {
    client: Arc<HttpClient>,
}

impl Subscriptions {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Subscribe a customer to a recurring product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(
        &self,
        params: &CreateSubscriptionParams,
    ) -> Result<ApiResponse<Subscription>> {
        self.client.post(COLLECTION, params).await
    }

    /// Retrieve a subscription by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn retrieve(&self, id: &str) -> Result<ApiResponse<Subscription>> {
        self.client
            .get(&format!("{COLLECTION}/{}", segment(id)))
            .await
    }

    /// List subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(
        &self,
        params: Option<&ListSubscriptionsParams>,
    ) -> Result<PaginatedResponse<Subscription>> {
        self.client.get_with_query(COLLECTION, params).await
    }

    /// Cancel a subscription. Sends an empty JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn cancel(&self, id: &str) -> Result<ApiResponse<Subscription>> {
        self.client
            .post(
                &format!("{COLLECTION}/{}/cancel", segment(id)),
                &serde_json::json!({}),
            )
            .await
    }

    /// Delete a subscription (soft delete, server side).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete(&self, id: &str) -> Result<ApiResponse<DeletedResource>> {
        self.client
            .delete(&format!("{COLLECTION}/{}", segment(id)))
            .await
    }
}
