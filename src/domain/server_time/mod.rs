//! Server-time domain — the exchange clock.

pub mod client;
pub mod wire;

pub use wire::TimeResponse;
