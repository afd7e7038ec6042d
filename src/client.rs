//! High-level client — `CoinbaseClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, the immutable configuration, and the
//! policy-applying request primitive the sub-clients are built on.

use crate::domain::candles::client::Candles;
use crate::domain::server_time::client::ServerTime;
use crate::domain::ticker::client::Ticker;
use crate::error::{ErrorPolicy, HttpError, SdkError};
use crate::http::CoinbaseHttp;

use reqwest::Method;
use serde_json::Value;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::candles::client::Candles as CandlesClient;
pub use crate::domain::server_time::client::ServerTime as ServerTimeClient;
pub use crate::domain::ticker::client::Ticker as TickerClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.candles()`, `client.ticker()`, `client.time()`. Configuration
/// is fixed by the builder; the client holds no other state and is
/// cheaply cloneable.
#[derive(Clone)]
pub struct CoinbaseClient {
    pub(crate) http: CoinbaseHttp,
    pub(crate) policy: ErrorPolicy,
}

impl CoinbaseClient {
    pub fn builder() -> CoinbaseClientBuilder {
        CoinbaseClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn candles(&self) -> Candles<'_> {
        Candles { client: self }
    }

    pub fn ticker(&self) -> Ticker<'_> {
        Ticker { client: self }
    }

    pub fn time(&self) -> ServerTime<'_> {
        ServerTime { client: self }
    }

    /// Execute a GET or POST against `path` under the configured base URL.
    ///
    /// This is the generic primitive the sub-clients are built on, public
    /// for endpoints the SDK does not model. Any method other than GET or
    /// POST is rejected before network I/O. Under the lenient policy a
    /// failed request is logged and yields the empty result
    /// (`Value::Array([])`); under the strict policy it propagates.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<Value, SdkError> {
        if method != Method::GET && method != Method::POST {
            return Err(SdkError::Validation(format!(
                "method must be GET or POST, got {method}"
            )));
        }
        apply_policy(self.policy, self.http.request(method, path, payload).await)
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.policy
    }
}

/// Apply the error policy to a raw HTTP outcome.
pub(crate) fn apply_policy(
    policy: ErrorPolicy,
    outcome: Result<Value, HttpError>,
) -> Result<Value, SdkError> {
    match outcome {
        Ok(value) => Ok(value),
        Err(err) => match policy {
            ErrorPolicy::Strict => Err(err.into()),
            ErrorPolicy::Lenient => {
                tracing::error!(error = %err, "request failed, yielding empty result");
                Ok(Value::Array(Vec::new()))
            }
        },
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinbaseClientBuilder {
    base_url: String,
    policy: ErrorPolicy,
    debug: bool,
    timeout: Duration,
}

impl Default for CoinbaseClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            policy: ErrorPolicy::default(),
            debug: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl CoinbaseClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Strict propagates failures as unrecoverable errors; lenient (the
    /// default) logs them and yields empty results.
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Surface underlying transport error detail in failure messages.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> CoinbaseClient {
        CoinbaseClient {
            http: CoinbaseHttp::new(&self.base_url, self.timeout, self.debug),
            policy: self.policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error() -> HttpError {
        HttpError::Status {
            method: "GET".to_string(),
            status: 500,
            url: "https://api.pro.coinbase.com/products/BTC-EUR/candles".to_string(),
            message: "Internal server error".to_string(),
        }
    }

    #[test]
    fn test_lenient_policy_yields_empty_result() {
        let out = apply_policy(ErrorPolicy::Lenient, Err(server_error())).unwrap();
        assert_eq!(out, Value::Array(Vec::new()));
    }

    #[test]
    fn test_strict_policy_propagates_with_status_and_url() {
        let err = apply_policy(ErrorPolicy::Strict, Err(server_error())).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("500"), "message should carry the status: {msg}");
        assert!(
            msg.contains("https://api.pro.coinbase.com/products/BTC-EUR/candles"),
            "message should carry the URL: {msg}"
        );
    }

    #[test]
    fn test_policy_passes_success_through() {
        let body = serde_json::json!({"price": "1.0"});
        let out = apply_policy(ErrorPolicy::Strict, Ok(body.clone())).unwrap();
        assert_eq!(out, body);
    }

    #[test]
    fn test_builder_defaults() {
        let client = CoinbaseClient::builder().build();
        assert_eq!(client.base_url(), "https://api.pro.coinbase.com");
        assert_eq!(client.error_policy(), ErrorPolicy::Lenient);
    }

    #[tokio::test]
    async fn test_request_rejects_unsupported_method() {
        let client = CoinbaseClient::builder()
            .base_url("http://localhost:1")
            .build();
        let err = client.request(Method::PUT, "time", None).await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
}
