//! Response envelopes returned by the DexPay API.

use serde::{Deserialize, Serialize};

use crate::Metadata;

/// Standard single-object envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server reports success.
    #[serde(default)]
    pub success: bool,
    /// Payload, when the endpoint returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Envelope fields not modelled above.
    #[serde(flatten)]
    pub extra: Metadata,
}

impl<T> ApiResponse<T> {
    /// Take the payload out of the envelope.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Paginated list envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Whether the server reports success.
    #[serde(default)]
    pub success: bool,
    /// Items on this page.
    pub data: Vec<T>,
    /// Page bookkeeping echoed by the server.
    pub pagination: Pagination,
    /// Envelope fields not modelled above.
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Pagination block of a [`PaginatedResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-based).
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Whether another page follows.
    pub has_next_page: bool,
}

/// Payload of soft-delete endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedResource {
    /// Confirmation message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Metadata,
}
