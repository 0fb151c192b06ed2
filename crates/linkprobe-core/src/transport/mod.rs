//! HTTP transport used by the probe executor.
//!
//! The probe logic only depends on the [`Transport`] trait; the libcurl
//! implementation lives in [`CurlTransport`]. Each call is one logical request
//! (redirects included) that either yields the final status code or a
//! [`TransportError`].

mod classify;
mod curl_easy;
mod error;

pub use classify::classify_curl_error;
pub use curl_easy::{CurlTransport, TransportSettings};
pub use error::TransportError;

use std::fmt;

/// Request method used by a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Head,
    Get,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Head => "HEAD",
            Method::Get => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpRequest<'a> {
    pub url: &'a str,
    pub method: Method,
    /// For GET: ask only for the first `n` bytes (`Range: bytes=0-(n-1)`).
    pub range_bytes: Option<u64>,
}

impl<'a> HttpRequest<'a> {
    pub fn head(url: &'a str) -> Self {
        Self {
            url,
            method: Method::Head,
            range_bytes: None,
        }
    }

    pub fn ranged_get(url: &'a str, range_bytes: u64) -> Self {
        Self {
            url,
            method: Method::Get,
            range_bytes: Some(range_bytes.max(1)),
        }
    }

    /// Value for the `Range` header, if this request asks for partial content.
    pub fn range_header(&self) -> Option<String> {
        match (self.method, self.range_bytes) {
            (Method::Get, Some(n)) => Some(format!("0-{}", n.saturating_sub(1))),
            _ => None,
        }
    }
}

/// Something that can perform an HTTP request and report its final status.
///
/// Implementations own their redirect, cookie and timeout policy. They must
/// not panic on network failure; every failure is a [`TransportError`].
pub trait Transport {
    fn execute(&self, request: &HttpRequest<'_>) -> Result<u16, TransportError>;
}
