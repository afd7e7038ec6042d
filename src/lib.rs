//! # Coinbase Pro public market-data SDK
//!
//! A Rust client for the Coinbase Pro public REST API: historical OHLCV
//! candles, last-trade tickers, and the exchange clock.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — shared newtypes, domain models, error types (no I/O)
//! 2. **HTTP** — `CoinbaseHttp`, one classified request per call, no retries
//! 3. **High-Level Client** — `CoinbaseClient` with nested sub-clients and
//!    a construction-time error policy
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinbasepro_public::prelude::*;
//!
//! let client = CoinbaseClient::builder().build();
//! let product = ProductId::new("BTC-EUR")?;
//!
//! let series = client
//!     .candles()
//!     .get(&product, Granularity::Hour1, None, None)
//!     .await?;
//! let price = client.ticker().price(&product).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types and the error-handling policy.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client, one classified request per call.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinbaseClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{is_valid_granularity, is_valid_product, Granularity, ProductId};

    // Domain types — candles
    pub use crate::domain::candles::{Candle, CandleSeries, TimeIndex};

    // Domain types — ticker, server time
    pub use crate::domain::server_time::TimeResponse;
    pub use crate::domain::ticker::TickerResponse;

    // Errors + policy
    pub use crate::error::{ErrorPolicy, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP + high-level client
    pub use crate::client::{
        CandlesClient, CoinbaseClient, CoinbaseClientBuilder, ServerTimeClient, TickerClient,
    };
    pub use crate::http::{CoinbaseHttp, Method};
}
