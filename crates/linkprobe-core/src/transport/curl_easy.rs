//! libcurl-backed transport.
//!
//! One `Easy` handle per request: cookies live in that handle's in-memory
//! jar and die with it, redirects are followed up to a hard cap, and ranged
//! GETs stop reading once the requested prefix has arrived.

use curl::easy::{Easy, List, PostRedirections};
use std::time::Duration;

use super::classify::classify_curl_error;
use super::{HttpRequest, Method, Transport, TransportError};

/// Per-transport settings shared by every request it performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    pub connect_timeout: Duration,
    /// Upper bound for the whole request, redirects included.
    pub timeout: Duration,
    pub max_redirects: u32,
    pub user_agent: String,
    /// Extra request headers sent with every probe.
    pub headers: Vec<(String, String)>,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(20),
            max_redirects: 5,
            user_agent: "linkprobe".to_string(),
            headers: Vec::new(),
        }
    }
}

/// Blocking transport on top of the curl crate.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    settings: TransportSettings,
}

impl CurlTransport {
    pub fn new(settings: TransportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &TransportSettings {
        &self.settings
    }

    fn configure(&self, easy: &mut Easy, request: &HttpRequest<'_>) -> Result<(), curl::Error> {
        easy.url(request.url)?;
        match request.method {
            Method::Head => easy.nobody(true)?,
            Method::Get => easy.get(true)?,
        }

        easy.follow_location(true)?;
        easy.max_redirections(self.settings.max_redirects)?;
        // Keep the method on 301/302/303 instead of downgrading to GET.
        let mut strict = PostRedirections::new();
        strict.redirect_all(true);
        easy.post_redirections(&strict)?;

        // Empty path: enable the cookie engine without reading any file.
        easy.cookie_file("")?;

        easy.connect_timeout(self.settings.connect_timeout)?;
        easy.timeout(self.settings.timeout)?;
        easy.useragent(&self.settings.user_agent)?;

        if let Some(range) = request.range_header() {
            easy.range(&range)?;
        }

        if !self.settings.headers.is_empty() {
            let mut list = List::new();
            for (k, v) in &self.settings.headers {
                list.append(&format!("{}: {}", k.trim(), v.trim()))?;
            }
            easy.http_headers(list)?;
        }
        Ok(())
    }
}

impl Transport for CurlTransport {
    fn execute(&self, request: &HttpRequest<'_>) -> Result<u16, TransportError> {
        let mut easy = Easy::new();
        self.configure(&mut easy, request)
            .map_err(|e| classify_curl_error(&e, None))?;

        let cap = match request.method {
            Method::Get => request.range_bytes,
            Method::Head => None,
        };
        let mut received: u64 = 0;
        let mut truncated = false;

        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    received = received.saturating_add(data.len() as u64);
                    if cap.is_some_and(|limit| received > limit) {
                        // Server ignored the range; we have what we need.
                        truncated = true;
                        return Ok(0);
                    }
                    Ok(data.len())
                })
                .map_err(|e| classify_curl_error(&e, None))?;
            transfer.perform()
        };

        let status = easy
            .response_code()
            .ok()
            .and_then(|code| u16::try_from(code).ok())
            .filter(|code| *code != 0);

        match performed {
            Ok(()) => status.ok_or_else(|| TransportError::Other("no HTTP status received".to_string())),
            Err(e) if truncated && e.is_write_error() => {
                tracing::debug!(url = request.url, received, "body cut off after range cap");
                status.ok_or_else(|| TransportError::Other(e.to_string()))
            }
            Err(e) => Err(classify_curl_error(&e, status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let s = TransportSettings::default();
        assert_eq!(s.max_redirects, 5);
        assert_eq!(s.connect_timeout, Duration::from_secs(10));
        assert_eq!(s.timeout, Duration::from_secs(20));
        assert!(s.headers.is_empty());
    }

    #[test]
    fn unsupported_scheme_is_classified_not_panicking() {
        let transport = CurlTransport::default();
        let err = transport
            .execute(&HttpRequest::head("nosuchscheme://example.invalid/"))
            .unwrap_err();
        assert!(matches!(err, TransportError::Other(_)), "got {err:?}");
    }
}
