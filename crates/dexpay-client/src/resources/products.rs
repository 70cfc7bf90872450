//! Product endpoints.

use std::sync::Arc;

use dexpay_core::{
    ApiResponse, CreateProductParams, DeletedResource, ListProductsParams,
    PaginatedResponse, Product, UpdateProductParams,
};

use super::segment;
use crate::client::HttpClient;
use crate::error::Result;

const COLLECTION: &str = "/products";

/// Product catalog.
#[derive(Debug, Clone)]
pub struct Products {
    client: Arc<HttpClient>,
}

impl Products {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(&self, params: &CreateProductParams) -> Result<ApiResponse<Product>> {
        self.client.post(COLLECTION, params).await
    }

    /// Retrieve a product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn retrieve(&self, id: &str) -> Result<ApiResponse<Product>> {
        self.client
            .get(&format!("{COLLECTION}/{}", segment(id)))
            .await
    }

    /// List products.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(
        &self,
        params: Option<&ListProductsParams>,
    ) -> Result<PaginatedResponse<Product>> {
        self.client.get_with_query(COLLECTION, params).await
    }

    /// Update a product; unset fields are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update(
        &self,
        id: &str,
        params: &UpdateProductParams,
    ) -> Result<ApiResponse<Product>> {
        self.client
            .patch(&format!("{COLLECTION}/{}", segment(id)), params)
            .await
    }

    /// Delete a product (soft delete, server side).
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
