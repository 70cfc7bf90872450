//! DexPay HTTP transport.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::DexPayConfig;
use crate::error::{ConfigError, DexPayError, Result};

/// Header carrying the public API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the secret API key.
pub const API_SECRET_HEADER: &str = "x-api-secret";

/// Authenticated JSON transport shared by every resource.
///
/// Each call performs exactly one HTTP exchange under its own deadline.
/// Nothing is retried or cached. Cloning is cheap and shares the
/// underlying connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_secret: String,
    timeout: Duration,
}

impl HttpClient {
    /// Build a transport from configuration.
    ///
    /// Credentials are not checked here; [`crate::DexPay::new`] does that.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &DexPayConfig) -> std::result::Result<Self, ConfigError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            timeout: config.timeout(),
        })
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Deadline applied to each request.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn headers(&self) -> std::result::Result<HeaderMap, DexPayError> {
        let value = |raw: &str| {
            HeaderValue::from_str(raw).map_err(|e| DexPayError::Unknown {
                message: format!("invalid credential header: {e}"),
            })
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, value(&self.api_key)?);
        headers.insert(API_SECRET_HEADER, value(&self.api_secret)?);
        Ok(headers)
    }

    /// Perform one request and decode the JSON body into `T`.
    ///
    /// `path` is appended to the base URL as-is. `body` is serialized to
    /// JSON when present; otherwise no body is sent.
    ///
    /// # Errors
    ///
    /// - [`DexPayError::Api`] for non-2xx responses
    /// - [`DexPayError::Network`] for transport failures and non-JSON bodies
    /// - [`DexPayError::Timeout`] when the deadline elapses
    /// - [`DexPayError::Unknown`] for anything else, including a 2xx body that
    ///   does not fit `T`
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute::<T, (), B>(method, path, None, body).await
    }

    async fn execute<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .headers(self.headers()?);

        if let Some(query) = query {
            request = request.query(query);
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| DexPayError::Unknown {
                message: format!("failed to serialize request body: {e}"),
            })?;
            request = request.body(bytes);
        }

        tracing::debug!(method = %method, path = %path, "Sending DexPay request");

        // The deadline covers sending and reading the body. Dropping the
        // future on expiry aborts the in-flight exchange.
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, bytes))
        };

        let (status, bytes) = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(Ok(parts)) => parts,
            Ok(Err(e)) if e.is_timeout() => return Err(self.timed_out(&method, path)),
            Ok(Err(e)) if e.is_builder() => {
                return Err(DexPayError::Unknown {
                    message: format!("failed to build request: {e}"),
                });
            }
            Ok(Err(e)) => {
                tracing::warn!(method = %method, path = %path, error = %e, "DexPay request failed");
                return Err(DexPayError::Network {
                    message: e.to_string(),
                });
            }
            Err(_elapsed) => return Err(self.timed_out(&method, path)),
        };

        tracing::debug!(method = %method, path = %path, status = status.as_u16(), "DexPay response");

        let data: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| DexPayError::Network {
                message: format!("invalid JSON in response body: {e}"),
            })?;

        if !status.is_success() {
            let err = DexPayError::from_error_body(status.as_u16(), &data);
            tracing::warn!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                code = %err.code(),
                message = %err.message(),
                "DexPay API error"
            );
            return Err(err);
        }

        serde_json::from_value(data).map_err(|e| DexPayError::Unknown {
            message: format!("unexpected response shape: {e}"),
        })
    }

    fn timed_out(&self, method: &Method, path: &str) -> DexPayError {
        tracing::warn!(
            method = %method,
            path = %path,
            timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            "DexPay request timed out"
        );
        DexPayError::Timeout {
            after: self.timeout,
        }
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    /// `GET path` with `query` encoded as the query string.
    ///
    /// `None`, or a value whose fields are all skipped, sends no query string.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get_with_query<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute::<T, Q, ()>(Method::GET, path, query, None).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// `PATCH path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::DELETE, path, None).await
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
