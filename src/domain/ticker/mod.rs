//! Ticker domain — last-trade snapshot for a product.

pub mod client;
pub mod wire;

pub use wire::TickerResponse;
