//! Host encoding for internationalized domain names.

use thiserror::Error;

/// Why a URL could not be turned into its transport-safe form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    #[error("URL has no valid scheme: {0}")]
    MissingScheme(String),
    #[error("invalid text after host: '{0}'")]
    InvalidPort(String),
    #[error("URL has an empty host: {0}")]
    EmptyHost(String),
    #[error("cannot encode host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
}

/// Encodes the host of `url` into its ASCII-compatible form.
///
/// Scheme, userinfo, port, path, query and fragment are copied through
/// byte for byte; only the host is rewritten (IDNA to-ASCII, which also
/// lowercases). The operation is idempotent. On failure nothing partial is
/// returned.
///
/// - `normalize_url("http://bücher.example/a?b")` → `"http://xn--bcher-kva.example/a?b"`
pub fn normalize_url(url: &str) -> Result<String, NormalizationError> {
    let (scheme, rest) = url
        .split_once("://")
        .filter(|(scheme, _)| is_valid_scheme(scheme))
        .ok_or_else(|| NormalizationError::MissingScheme(url.to_string()))?;

    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);
    let (userinfo, host_port) = match authority.rfind('@') {
        Some(at) => authority.split_at(at + 1),
        None => ("", authority),
    };
    let (host, port) = split_port(host_port);
    if !port.is_empty() && !port.starts_with(':') {
        return Err(NormalizationError::InvalidPort(port.to_string()));
    }
    if host.is_empty() {
        return Err(NormalizationError::EmptyHost(url.to_string()));
    }

    let encoded = url::Host::parse(host).map_err(|source| NormalizationError::InvalidHost {
        host: host.to_string(),
        source,
    })?;

    Ok(format!("{scheme}://{userinfo}{encoded}{port}{tail}"))
}

/// RFC 3986: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Splits `host[:port]` into the host and the `:port` suffix (kept verbatim).
fn split_port(host_port: &str) -> (&str, &str) {
    if host_port.starts_with('[') {
        // IPv6 literal: the port separator can only follow the closing bracket.
        return match host_port.find(']') {
            Some(close) => host_port.split_at(close + 1),
            None => (host_port, ""),
        };
    }
    match host_port.rfind(':') {
        Some(colon) => host_port.split_at(colon),
        None => (host_port, ""),
    }
}
