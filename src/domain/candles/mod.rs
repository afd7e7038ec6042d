//! Candles domain — historical OHLCV series.

pub mod client;
pub mod convert;
pub mod range;
pub mod wire;

use crate::shared::{Granularity, ProductId};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One OHLCV sample. Field order is the documented column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candle {
    /// Candle open time, timezone-naive, derived from the epoch field.
    pub time: NaiveDateTime,
    pub low: f64,
    pub high: f64,
    pub open: f64,
    pub close: f64,
    pub volume: f64,
}

/// How the series timestamps are spaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeIndex {
    /// Evenly spaced at the granularity's frequency.
    Fixed(Granularity),
    /// Gaps from exchange downtime or partial candles.
    Irregular,
}

/// Ordered OHLCV series, oldest first, annotated with the originating
/// product and granularity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleSeries {
    pub product: ProductId,
    pub granularity: Granularity,
    pub index: TimeIndex,
    candles: Vec<Candle>,
}

impl CandleSeries {
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candle> {
        self.candles.iter()
    }

    pub fn first(&self) -> Option<&Candle> {
        self.candles.first()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }
}
