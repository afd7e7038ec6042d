//! Unified SDK error types and the error-handling policy.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// Transport failures carry the underlying error detail only when the
/// client was built with the debug flag on; otherwise the message names
/// the failure kind and the base URL.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The exchange answered with a non-200 status.
    #[error("{method} ({status}) {url} - {message}")]
    Status {
        method: String,
        status: u16,
        url: String,
        message: String,
    },

    #[error("connection failure: {url}{}", detail_suffix(.detail))]
    Connect { url: String, detail: Option<String> },

    #[error("timeout: {url}{}", detail_suffix(.detail))]
    Timeout { url: String, detail: Option<String> },

    #[error("HTTP protocol failure: {url}{}", detail_suffix(.detail))]
    Protocol { url: String, detail: Option<String> },
}

/// How the client treats API and transport failures.
///
/// The original tool toggled this through a mutable global flag; here it
/// is an explicit policy fixed at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log the failure on the operator channel and yield an empty result.
    #[default]
    Lenient,
    /// Propagate the failure as an unrecoverable error.
    Strict,
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(" - {d}"),
        None => String::new(),
    }
}
