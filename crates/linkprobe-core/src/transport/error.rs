//! Transport failure type consumed by the probe executor.

use thiserror::Error;

/// Tagged failure of one request. Every variant carries the underlying
/// transport text so it can be surfaced in reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connect or overall timeout expired.
    #[error("timed out: {0}")]
    Timeout(String),
    /// Redirect chain exceeded the configured cap.
    #[error("too many redirects: {0}")]
    TooManyRedirects(String),
    /// Server answered with an error the transport treats as fatal; `status`
    /// is the response code when one was received.
    #[error("client error: {message}")]
    ClientError {
        status: Option<u16>,
        message: String,
    },
    /// No response obtained (connection refused, DNS, TLS, reset).
    #[error("request failed: {0}")]
    Request(String),
    /// Anything else (malformed URL, unsupported scheme, internal errors).
    #[error("{0}")]
    Other(String),
}
