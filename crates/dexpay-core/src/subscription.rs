//! Subscription types.

use serde::{Deserialize, Serialize};

use crate::query::{is_unset_number, is_unset_str};
use crate::{Metadata, SubscriptionStatus};

/// Parameters for subscribing a customer to a recurring product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscriptionParams {
    /// Subscribing customer.
    pub customer_id: String,
    /// Recurring product.
    pub product_id: String,
    /// Free-form merchant data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateSubscriptionParams {
    /// Subscribe `customer_id` to `product_id`.
    #[must_use]
    pub fn new(customer_id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            product_id: product_id.into(),
            metadata: None,
        }
    }
}

/// A subscription as returned by the API.
///
/// Only `id` is required. Unmodelled fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription identifier.
    pub id: String,
    /// Subscribed customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Recurring product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    /// Start of the current period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_start: Option<String>,
    /// End of the current period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<String>,
    /// Next charge date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_billing_date: Option<String>,
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

/// Filters for listing subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListSubscriptionsParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "is_unset_number")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "is_unset_number")]
    pub limit: Option<u32>,
    /// Only subscriptions in this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    /// Only subscriptions of this customer.
    #[serde(skip_serializing_if = "is_unset_str")]
    pub customer_id: Option<String>,
    /// Only subscriptions to this product.
    #[serde(skip_serializing_if = "is_unset_str")]
    pub product_id: Option<String>,
}
