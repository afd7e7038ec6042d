//! Server-time sub-client.
//!
//! `now` is the one documented silent-failure operation: every failure
//! kind degrades to `None`, with the cause logged instead of raised.

use super::wire::TimeResponse;
use crate::client::CoinbaseClient;
use crate::error::SdkError;
use chrono::{DateTime, Utc};
use reqwest::Method;

/// Sub-client for the exchange clock.
pub struct ServerTime<'a> {
    pub(crate) client: &'a CoinbaseClient,
}

impl<'a> ServerTime<'a> {
    /// Current exchange time, or `None` on any failure.
    pub async fn now(&self) -> Option<DateTime<Utc>> {
        match self.try_now().await {
            Ok(Some(time)) => Some(time),
            Ok(None) => {
                tracing::warn!("time response carried no usable epoch field");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "time request failed");
                None
            }
        }
    }

    /// The fallible fetch `now` wraps; failure kinds stay inspectable here.
    async fn try_now(&self) -> Result<Option<DateTime<Utc>>, SdkError> {
        let raw = self.client.request(Method::GET, "time", None).await?;
        let parsed: TimeResponse = serde_json::from_value(raw)?;
        Ok(parsed.to_datetime())
    }
}
