//! Checkout session types.
//!
//! A checkout session is a hosted payment page for one order. The customer
//! is sent to `payment_url`; the merchant is notified on `webhook_url`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Currency, Metadata, PaymentMethod, TransactionStatus};

/// Parameters for creating a checkout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCheckoutSessionParams {
    /// Unique order reference on the merchant side.
    pub reference: String,
    /// Name of the item or service sold.
    pub item_name: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Redirect after a successful payment.
    pub success_url: String,
    /// Redirect after a failed payment.
    pub failure_url: String,
    /// Endpoint notified of status changes.
    pub webhook_url: String,
    /// Free-form merchant data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// When the session stops accepting payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateCheckoutSessionParams {
    /// Attach merchant metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set an expiry date.
    #[must_use]
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

/// A checkout session as returned by the API.
///
/// Every field is optional: list endpoints may return abbreviated sessions.
/// Fields the SDK does not model are kept in `extra`, so re-serializing a
/// session yields the body the server sent.
#[allow(clippy::option_option)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Session identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Merchant order reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Amount in minor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Payment status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// Hosted payment page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    /// Redirect after success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// Redirect after failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    /// Notification endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Expiry timestamp. `Some(None)` is an explicit `null` from the server.
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<Option<String>>,
    /// Whether the session was created with sandbox keys.
    #[serde(rename = "isSandbox", default, skip_serializing_if = "Option::is_none")]
    pub is_sandbox: Option<bool>,
    /// Latest payment attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_attempt: Option<PaymentAttempt>,
    /// Sandbox payment simulator page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox_payment_url: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Present-but-null decodes to `Some(None)`; absent stays `None` via `default`.
#[allow(clippy::option_option)]
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A payment attempt on a checkout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAttempt {
    /// Attempt identifier.
    pub id: String,
    /// Attempt status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// Operator page the customer must visit, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    /// Mobile money operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Parameters for starting a payment attempt on a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentAttemptParams {
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Operator code (`wave`, `orange_money`, `mtn`, `moov`).
    pub operator: String,
    /// ISO country code (`SN`, `CI`, `ML`, ...).
    #[serde(rename = "countryISO")]
    pub country_iso: String,
    /// Paying customer.
    pub customer: PaymentCustomer,
}

/// Customer details attached to a payment attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCustomer {
    /// Full name.
    pub name: String,
    /// Phone number in international format.
    pub phone: String,
    /// Email address.
    pub email: String,
}
