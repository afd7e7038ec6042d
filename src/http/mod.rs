//! HTTP client layer — `CoinbaseHttp`, one classified request per call.

pub mod client;

pub use client::CoinbaseHttp;
pub use reqwest::Method;
