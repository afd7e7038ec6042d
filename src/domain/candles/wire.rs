//! Wire types for the candles endpoint (REST).

use serde::{Deserialize, Serialize};

/// Raw candle as the exchange sends it: a 6-tuple
/// `[epoch, low, high, open, close, volume]`. The response array is
/// newest first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawCandle(pub f64, pub f64, pub f64, pub f64, pub f64, pub f64);

impl RawCandle {
    pub fn epoch(&self) -> f64 {
        self.0
    }

    pub fn low(&self) -> f64 {
        self.1
    }

    pub fn high(&self) -> f64 {
        self.2
    }

    pub fn open(&self) -> f64 {
        self.3
    }

    pub fn close(&self) -> f64 {
        self.4
    }

    pub fn volume(&self) -> f64 {
        self.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_candle_from_json_array() {
        let json = "[[1614560400, 45000.0, 45500.5, 45100.1, 45400.9, 12.5],
                     [1614556800, 44800.0, 45200.0, 44900.0, 45100.1, 8.25]]";
        let raw: Vec<RawCandle> = serde_json::from_str(json).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].epoch(), 1614560400.0);
        assert_eq!(raw[0].low(), 45000.0);
        assert_eq!(raw[0].high(), 45500.5);
        assert_eq!(raw[0].open(), 45100.1);
        assert_eq!(raw[0].close(), 45400.9);
        assert_eq!(raw[0].volume(), 12.5);
    }
}
