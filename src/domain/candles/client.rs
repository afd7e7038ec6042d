//! Candles sub-client — historical OHLCV queries.

use super::range::resolve_range;
use super::wire::RawCandle;
use super::CandleSeries;
use crate::client::CoinbaseClient;
use crate::error::SdkError;
use crate::shared::{Granularity, ProductId};
use reqwest::Method;

/// Sub-client for historical candle operations.
pub struct Candles<'a> {
    pub(crate) client: &'a CoinbaseClient,
}

impl<'a> Candles<'a> {
    /// Fetch historical candles for `product`, oldest first.
    ///
    /// With only `start` given, the window is derived to span one response
    /// page at this granularity; with neither, the exchange returns the
    /// most recent page. Under the lenient policy a failed request yields
    /// an empty series.
    pub async fn get(
        &self,
        product: &ProductId,
        granularity: Granularity,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<CandleSeries, SdkError> {
        let (start, end) = resolve_range(start, end, granularity)?;

        let mut path = format!(
            "products/{}/candles?granularity={}",
            product,
            granularity.seconds()
        );
        if let Some(s) = &start {
            path = format!("{}&start={}", path, urlencoding::encode(s));
        }
        if let Some(e) = &end {
            path = format!("{}&end={}", path, urlencoding::encode(e));
        }

        let raw = self.client.request(Method::GET, &path, None).await?;
        let raw: Vec<RawCandle> = serde_json::from_value(raw)?;
        CandleSeries::from_raw(product.clone(), granularity, raw)
    }
}
