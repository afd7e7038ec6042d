//! Wire types for the ticker endpoint (REST).

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of the last trade for a product.
///
/// Every field is optional: the exchange omits fields on quiet books and
/// the lenient error policy substitutes an empty body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerResponse {
    pub trade_id: Option<u64>,
    pub price: Option<Decimal>,
    pub size: Option<Decimal>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub time: Option<DateTime<Utc>>,
}

impl TickerResponse {
    /// Last-trade price as `f64`, or 0.0 when absent.
    ///
    /// 0.0 is indistinguishable from a legitimately zero price; callers
    /// that need to tell the difference inspect `price` directly.
    pub fn last_price(&self) -> f64 {
        self.price.and_then(|p| p.to_f64()).unwrap_or(0.0)
    }
}
