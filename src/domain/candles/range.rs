//! Time-range resolution for historical queries.

use crate::error::SdkError;
use crate::shared::Granularity;
use chrono::{Duration, NaiveDateTime};

/// Timestamp format the exchange accepts: ISO-8601, optional fractional
/// seconds.
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Derived timestamps are emitted with microsecond precision.
const ISO_FORMAT_OUT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Resolve the (start, end) pair for a candles query.
///
/// With only a start, the end is derived so the window spans one response
/// page at this granularity. Every other combination passes through
/// unchanged; ordering is left to the exchange.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
    granularity: Granularity,
) -> Result<(Option<String>, Option<String>), SdkError> {
    match (start, end) {
        (Some(start), None) => {
            let parsed = parse_iso(start)?;
            let window = i64::from(granularity.seconds())
                * i64::from(granularity.lookback_multiplier());
            let derived = parsed + Duration::seconds(window);
            Ok((
                Some(start.to_string()),
                Some(derived.format(ISO_FORMAT_OUT).to_string()),
            ))
        }
        (start, end) => Ok((start.map(str::to_string), end.map(str::to_string))),
    }
}

fn parse_iso(value: &str) -> Result<NaiveDateTime, SdkError> {
    NaiveDateTime::parse_from_str(value, ISO_FORMAT)
        .map_err(|e| SdkError::Validation(format!("invalid ISO-8601 timestamp {value:?}: {e}")))
}
