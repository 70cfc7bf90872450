//! Customer types.

use serde::{Deserialize, Serialize};

use crate::query::{is_unset_number, is_unset_str};
use crate::Metadata;

/// Parameters for creating a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerParams {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number in international format.
    pub phone: String,
    /// Country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Free-form merchant data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Partial update of a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomerParams {
    /// Full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Free-form merchant data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// A customer as returned by the API.
///
/// Only `id` is required. Unmodelled fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier.
    pub id: String,
    /// Full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Lifetime amount paid, in minor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<i64>,
    /// Number of paid orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_orders: Option<u64>,
    /// Free-form merchant data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Creation timestamp.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Filters for listing customers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListCustomersParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "is_unset_number")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "is_unset_number")]
    pub limit: Option<u32>,
    /// Exact email match.
    #[serde(skip_serializing_if = "is_unset_str")]
    pub email: Option<String>,
    /// Exact phone match.
    #[serde(skip_serializing_if = "is_unset_str")]
    pub phone: Option<String>,
}
