//! Client error types.

use std::time::Duration;

/// Machine code of [`DexPayError::Api`] when the server sends none.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// Machine code of [`DexPayError::Network`].
pub const NETWORK_ERROR_CODE: &str = "NETWORK_ERROR";

/// Machine code of [`DexPayError::Timeout`].
pub const TIMEOUT_CODE: &str = "TIMEOUT";

/// Message of [`DexPayError::Api`] when the body carries neither `message` nor `error`.
pub const DEFAULT_API_ERROR_MESSAGE: &str = "An error occurred";

/// Result type for DexPay requests.
pub type Result<T> = std::result::Result<T, DexPayError>;

/// Errors that can occur when calling the DexPay API.
///
/// Every variant exposes the same three facts through [`message`](Self::message),
/// [`status_code`](Self::status_code) and [`code`](Self::code), so callers can
/// branch on the machine code without matching on the variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DexPayError {
    /// Server answered with a non-success status.
    #[error("API error: {code} - {message}")]
    Api {
        /// Server-supplied message, or a generic default.
        message: String,
        /// HTTP status code.
        status_code: u16,
        /// Server-supplied machine code, or `UNKNOWN_ERROR`.
        code: String,
    },

    /// Transport failure: DNS, refused connection, TLS, unreadable body.
    #[error("network error: {message}")]
    Network {
        /// Underlying transport error.
        message: String,
    },

    /// The configured deadline elapsed before the exchange completed.
    #[error("Request timeout")]
    Timeout {
        /// The deadline that elapsed.
        after: Duration,
    },

    /// Any failure not classified above.
    #[error("unknown error: {message}")]
    Unknown {
        /// Description of the failure.
        message: String,
    },
}

impl DexPayError {
    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Api { message, .. } | Self::Network { message } | Self::Unknown { message } => {
                message
            }
            Self::Timeout { .. } => "Request timeout",
        }
    }

    /// HTTP-like status code: the server's for `Api`, 408 for `Timeout`, 500 otherwise.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Api { status_code, .. } => *status_code,
            Self::Timeout { .. } => 408,
            Self::Network { .. } | Self::Unknown { .. } => 500,
        }
    }

    /// Machine-readable code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Api { code, .. } => code,
            Self::Network { .. } => NETWORK_ERROR_CODE,
            Self::Timeout { .. } => TIMEOUT_CODE,
            Self::Unknown { .. } => UNKNOWN_ERROR_CODE,
        }
    }

    /// Whether the server rejected the request.
    #[must_use]
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Whether the deadline elapsed.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Build an `Api` error from a decoded error body.
    ///
    /// The message is taken from `message`, then `error`, then a default;
    /// the code from `code`, then `UNKNOWN_ERROR`. Empty strings count as absent.
    #[must_use]
    pub fn from_error_body(status_code: u16, body: &serde_json::Value) -> Self {
        let field = |name: &str| {
            body.get(name)
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self::Api {
            message: field("message")
                .or_else(|| field("error"))
                .unwrap_or_else(|| DEFAULT_API_ERROR_MESSAGE.to_string()),
            status_code,
            code: field("code").unwrap_or_else(|| UNKNOWN_ERROR_CODE.to_string()),
        }
    }
}

/// Errors raised while building a client. Never returned by a request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API key is empty or missing.
    #[error("DexPay: api_key is required")]
    MissingApiKey,

    /// The API secret is empty or missing.
    #[error("DexPay: api_secret is required")]
    MissingApiSecret,

    /// The timeout is not a number of milliseconds.
    #[error("DexPay: invalid timeout: {0}")]
    InvalidTimeout(String),

    /// The underlying HTTP client could not be built.
    #[error("DexPay: failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
