//! Error types for the fetch boundary.
//!
//! Every failure a load operation can hit (transport, unexpected HTTP
//! status, body decode) collapses into a single [`FetchError`]. Callers
//! above the service layer treat it as opaque: the view layer only ever
//! sees it inside a `ViewState::Failure`.

use thiserror::Error;

/// Failure of a single fetch-and-decode round trip.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, TLS).
    /// The `#[from]` attribute allows automatic conversion from `reqwest::Error`.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// The body did not decode into the expected wire schema.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}
