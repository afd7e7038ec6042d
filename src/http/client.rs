//! Low-level HTTP client — `CoinbaseHttp`.
//!
//! One request per call, no retries: failures are classified and surfaced
//! immediately. Policy handling (strict vs. lenient) lives one layer up in
//! `CoinbaseClient`.

use crate::error::HttpError;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;

/// Low-level client for the Coinbase Pro public REST API.
#[derive(Clone)]
pub struct CoinbaseHttp {
    base_url: String,
    client: Client,
    debug: bool,
}

impl CoinbaseHttp {
    pub fn new(base_url: &str, timeout: Duration, debug: bool) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            debug,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a single request against `{base_url}/{path}`.
    ///
    /// GET requests carry no body; POST requests carry `payload` as a
    /// JSON-encoded body. A 200 response is parsed as JSON and returned
    /// verbatim; any other status becomes `HttpError::Status` with the
    /// exchange's `message` field when the error body carries one.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<Value, HttpError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let mut req = self.client.request(method.clone(), url.as_str());
        if method == Method::POST {
            if let Some(body) = payload {
                req = req.json(body);
            }
        }

        let resp = req.send().await.map_err(|e| self.classify(e))?;
        let status = resp.status().as_u16();

        if status != 200 {
            let body = resp.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                method: method.to_string(),
                status,
                url,
                message: error_message(&body),
            });
        }

        resp.json::<Value>().await.map_err(|e| self.classify(e))
    }

    /// Map a transport failure onto one of the three classified kinds.
    /// Detail is captured only in debug mode.
    fn classify(&self, err: reqwest::Error) -> HttpError {
        let url = self.base_url.clone();
        let detail = self.debug.then(|| err.to_string());
        if err.is_timeout() {
            HttpError::Timeout { url, detail }
        } else if err.is_connect() {
            HttpError::Connect { url, detail }
        } else {
            HttpError::Protocol { url, detail }
        }
    }
}

/// Extract the exchange's `message` field from an error body, falling back
/// to the raw body text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_extracts_message_field() {
        assert_eq!(error_message(r#"{"message":"NotFound"}"#), "NotFound");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("upstream connect error"), "upstream connect error");
        assert_eq!(error_message(r#"{"error":"oops"}"#), r#"{"error":"oops"}"#);
        assert_eq!(error_message(""), "");
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let http = CoinbaseHttp::new(
            "https://api.pro.coinbase.com/",
            Duration::from_secs(30),
            false,
        );
        assert_eq!(http.base_url(), "https://api.pro.coinbase.com");
    }
}
