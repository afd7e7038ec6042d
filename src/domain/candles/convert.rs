//! Conversion: raw candle tuples → `CandleSeries` (reverse + index inference).

use super::wire::RawCandle;
use super::{Candle, CandleSeries, TimeIndex};
use crate::error::SdkError;
use crate::shared::{Granularity, ProductId};
use chrono::DateTime;

impl TryFrom<RawCandle> for Candle {
    type Error = SdkError;

    fn try_from(raw: RawCandle) -> Result<Self, Self::Error> {
        let time = DateTime::from_timestamp(raw.epoch() as i64, 0)
            .ok_or_else(|| {
                SdkError::Validation(format!("candle epoch out of range: {}", raw.epoch()))
            })?
            .naive_utc();
        Ok(Candle {
            time,
            low: raw.low(),
            high: raw.high(),
            open: raw.open(),
            close: raw.close(),
            volume: raw.volume(),
        })
    }
}

impl CandleSeries {
    /// Build a series from the exchange's newest-first tuples.
    ///
    /// The input is reversed so the series runs oldest first. If the
    /// timestamps are evenly spaced at the granularity's frequency the
    /// index is `Fixed`; any spacing mismatch degrades to `Irregular`
    /// instead of failing.
    pub fn from_raw(
        product: ProductId,
        granularity: Granularity,
        raw: Vec<RawCandle>,
    ) -> Result<Self, SdkError> {
        let mut candles = Vec::with_capacity(raw.len());
        for r in raw.into_iter().rev() {
            candles.push(Candle::try_from(r)?);
        }
        let index = infer_index(&candles, granularity);
        Ok(Self {
            product,
            granularity,
            index,
            candles,
        })
    }
}

/// `Fixed` iff every consecutive pair is exactly one granularity apart.
fn infer_index(candles: &[Candle], granularity: Granularity) -> TimeIndex {
    let step = i64::from(granularity.seconds());
    let evenly_spaced = candles
        .windows(2)
        .all(|w| (w[1].time - w[0].time).num_seconds() == step);
    if evenly_spaced {
        TimeIndex::Fixed(granularity)
    } else {
        TimeIndex::Irregular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> ProductId {
        ProductId::new("BTC-EUR").unwrap()
    }

    fn raw(epoch: f64) -> RawCandle {
        RawCandle(epoch, 1.0, 3.0, 2.0, 2.5, 10.0)
    }

    #[test]
    fn test_descending_input_becomes_ascending_series() {
        let input = vec![raw(1614564000.0), raw(1614560400.0), raw(1614556800.0)];
        let series =
            CandleSeries::from_raw(product(), Granularity::Hour1, input).unwrap();
        assert_eq!(series.len(), 3);
        let times: Vec<_> = series.iter().map(|c| c.time).collect();
        assert!(times.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(series.index, TimeIndex::Fixed(Granularity::Hour1));
    }

    #[test]
    fn test_irregular_spacing_falls_back_instead_of_failing() {
        // A gap of two hours between the first two candles.
        let input = vec![raw(1614567600.0), raw(1614560400.0), raw(1614556800.0)];
        let series =
            CandleSeries::from_raw(product(), Granularity::Hour1, input).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.index, TimeIndex::Irregular);
    }

    #[test]
    fn test_candle_field_values_survive_normalization() {
        let input = vec![RawCandle(1614556800.0, 44800.0, 45200.0, 44900.0, 45100.1, 8.25)];
        let series =
            CandleSeries::from_raw(product(), Granularity::Hour1, input).unwrap();
        let candle = series.first().unwrap();
        assert_eq!(candle.low, 44800.0);
        assert_eq!(candle.high, 45200.0);
        assert_eq!(candle.open, 44900.0);
        assert_eq!(candle.close, 45100.1);
        assert_eq!(candle.volume, 8.25);
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        let series =
            CandleSeries::from_raw(product(), Granularity::Minute1, Vec::new()).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.index, TimeIndex::Fixed(Granularity::Minute1));
    }

    #[test]
    fn test_out_of_range_epoch_is_rejected() {
        let input = vec![raw(f64::MAX)];
        let err =
            CandleSeries::from_raw(product(), Granularity::Hour1, input).unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
}
