//! Network URL constants for the Coinbase Pro public API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.pro.coinbase.com/";
