//! Shared newtypes used across all domain modules.
//!
//! `ProductId` and `Granularity` validate on construction: once a value
//! exists, every downstream operation can rely on it being well-formed, so
//! a partially validated request is unrepresentable.

use crate::error::SdkError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

lazy_static! {
    /// Trading pairs look like `BTC-EUR`: two segments of 2-5 chars each,
    /// uppercase letters and digits 1-9 only.
    static ref PRODUCT_PATTERN: Regex = Regex::new(r"^[1-9A-Z]{2,5}-[1-9A-Z]{2,5}$").unwrap();
}

/// Returns true iff `symbol` is a syntactically valid trading pair.
pub fn is_valid_product(symbol: &str) -> bool {
    PRODUCT_PATTERN.is_match(symbol)
}

/// Returns true iff `value` is a candle duration the exchange supports.
pub fn is_valid_granularity(value: u32) -> bool {
    Granularity::from_secs(value).is_some()
}

// ─── ProductId ───────────────────────────────────────────────────────────────

/// Validated trading-pair identifier (e.g. `"BTC-EUR"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(symbol: impl Into<String>) -> Result<Self, SdkError> {
        let symbol = symbol.into();
        if !is_valid_product(&symbol) {
            return Err(SdkError::Validation(format!(
                "invalid product id: {symbol:?}"
            )));
        }
        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductId::new(s)
    }
}

impl TryFrom<&str> for ProductId {
    type Error = SdkError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        ProductId::new(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = SdkError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ProductId::new(s)
    }
}

impl Serialize for ProductId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ProductId::new(s).map_err(serde::de::Error::custom)
    }
}

// ─── Granularity ─────────────────────────────────────────────────────────────

/// Candle duration supported by the exchange, in seconds per candle.
///
/// Serializes as the integer the exchange expects; any integer outside the
/// supported set is rejected on deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Granularity {
    Minute1,
    Minute5,
    Minute15,
    #[default]
    Hour1,
    Hour6,
    Day1,
}

impl Granularity {
    pub fn from_secs(secs: u32) -> Option<Self> {
        match secs {
            60 => Some(Self::Minute1),
            300 => Some(Self::Minute5),
            900 => Some(Self::Minute15),
            3600 => Some(Self::Hour1),
            21600 => Some(Self::Hour6),
            86400 => Some(Self::Day1),
            _ => None,
        }
    }

    /// Duration of one candle in seconds.
    pub fn seconds(&self) -> u32 {
        match self {
            Self::Minute1 => 60,
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Hour1 => 3600,
            Self::Hour6 => 21600,
            Self::Day1 => 86400,
        }
    }

    /// Candles per response page: with only a range start given, the
    /// resolver derives an end `seconds() * lookback_multiplier()` later.
    pub fn lookback_multiplier(&self) -> u32 {
        match self {
            Self::Minute1 => 1,
            Self::Minute5 => 5,
            Self::Minute15 => 10,
            Self::Hour1 => 60,
            Self::Hour6 => 360,
            Self::Day1 => 1440,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Hour1 => "1h",
            Self::Hour6 => "6h",
            Self::Day1 => "1d",
        }
    }
}

impl TryFrom<u32> for Granularity {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_secs(value).ok_or_else(|| {
            format!("granularity options: 60, 300, 900, 3600, 21600, 86400 (got {value})")
        })
    }
}

impl From<Granularity> for u32 {
    fn from(g: Granularity) -> Self {
        g.seconds()
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
