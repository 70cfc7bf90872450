//! Customer endpoints.

use std::sync::Arc;

use dexpay_core::{
    ApiResponse, CreateCustomerParams, Customer, DeletedResource,
    ListCustomersParams, PaginatedResponse, UpdateCustomerParams,
};

use super::segment;
use crate::client::HttpClient;
use crate::error::Result;

const COLLECTION: &str = "/customers";

/// Merchant customers.
#[derive(Debug, Clone)]
pub struct Customers {
    client: Arc<HttpClient>,
}

impl Customers {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(&self, params: &CreateCustomerParams) -> Result<ApiResponse<Customer>> {
        self.client.post(COLLECTION, params).await
    }

    /// Retrieve a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn retrieve(&self, id: &str) -> Result<ApiResponse<Customer>> {
        self.client
            .get(&format!("{COLLECTION}/{}", segment(id)))
            .await
    }

    /// List customers, optionally filtered by email or phone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(
        &self,
        params: Option<&ListCustomersParams>,
    ) -> Result<PaginatedResponse<Customer>> {
        self.client.get_with_query(COLLECTION, params).await
    }

    /// Update a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update(
        &self,
        id: &str,
        params: &UpdateCustomerParams,
    ) -> Result<ApiResponse<Customer>> {
        self.client
            .patch(&format!("{COLLECTION}/{}", segment(id)), params)
            .await
    }

    /// Delete a customer (soft delete, server side).
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
