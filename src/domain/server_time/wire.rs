//! Wire types for the time endpoint (REST).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Exchange clock response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeResponse {
    pub iso: Option<String>,
    /// Seconds since the Unix epoch, fractional.
    pub epoch: Option<f64>,
}

impl TimeResponse {
    /// Exchange time from the epoch field, truncated to whole seconds.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.epoch? as i64, 0)
    }
}
