//! Ticker sub-client — last-trade price queries.

use super::wire::TickerResponse;
use crate::client::CoinbaseClient;
use crate::error::SdkError;
use crate::shared::ProductId;
use reqwest::Method;

/// Sub-client for ticker operations.
pub struct Ticker<'a> {
    pub(crate) client: &'a CoinbaseClient,
}

impl<'a> Ticker<'a> {
    /// Fetch the ticker snapshot for `product`.
    ///
    /// A body that is not a ticker object (including the lenient-mode
    /// empty result) yields the all-absent default rather than an error.
    pub async fn get(&self, product: &ProductId) -> Result<TickerResponse, SdkError> {
        let path = format!("products/{product}/ticker");
        let raw = self.client.request(Method::GET, &path, None).await?;
        Ok(serde_json::from_value(raw).unwrap_or_default())
    }

    /// Last-trade price for `product`, or 0.0 when the exchange reports
    /// no price. Never fails on a missing field.
    pub async fn price(&self, product: &ProductId) -> Result<f64, SdkError> {
        Ok(self.get(product).await?.last_price())
    }
}
