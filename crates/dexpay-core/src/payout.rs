//! Payout (withdrawal) types.
//!
//! Payouts move funds from the merchant balance to a mobile money wallet.
//! A payout can only be cancelled while `PENDING`; the server enforces this.

use serde::{Deserialize, Serialize};

use crate::query::is_unset_number;
use crate::{Currency, Metadata, TransactionStatus};

/// Where a payout is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutDestinationDetails {
    /// Mobile money operator (`wave`, `orange_money`, `mtn`, `moov`).
    pub operator: String,
    /// ISO country code.
    #[serde(rename = "countryISO")]
    pub country_iso: String,
    /// Recipient name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Metadata,
}

impl PayoutDestinationDetails {
    /// Destination on `operator` in `country_iso`.
    #[must_use]
    pub fn new(operator: impl Into<String>, country_iso: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            country_iso: country_iso.into(),
            ..Self::default()
        }
    }

    /// Set the recipient name.
    #[must_use]
    pub fn with_recipient_name(mut self, name: impl Into<String>) -> Self {
        self.recipient_name = Some(name.into());
        self
    }
}

/// Parameters for creating a payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePayoutParams {
    /// Amount in minor units.
    pub amount: i64,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Recipient phone number.
    pub destination_phone: String,
    /// Recipient wallet details.
    pub destination_details: PayoutDestinationDetails,
    /// Free-form merchant data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Body of the payout cancel endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelPayoutParams {
    /// Why the payout is cancelled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A payout as returned by the API.
///
/// Only `id` is required. Unmodelled fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    /// Payout identifier.
    pub id: String,
    /// Server-generated reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Amount sent to the recipient, in minor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Fees charged to the merchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<i64>,
    /// `amount + fees`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<i64>,
    /// Payout status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// Recipient phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_phone: Option<String>,
    /// Recipient wallet details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_details: Option<PayoutDestinationDetails>,
    /// Free-form merchant data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Operator rejection reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Completion timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
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

/// Filters for listing payouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListPayoutsParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "is_unset_number")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "is_unset_number")]
    pub limit: Option<u32>,
    /// Only payouts in this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
}
