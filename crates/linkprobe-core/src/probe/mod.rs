//! Probe executor: one request, one normalized outcome.
//!
//! [`probe`] issues a single request through a [`Transport`] and folds the
//! status code or transport error into a [`ProbeOutcome`]. It never touches
//! the result cache; that is the checker's job.

mod result;

pub use result::ProbeResult;

use crate::classify::{ErrorKind, Failure};
use crate::transport::{HttpRequest, Transport, TransportError};
use crate::url_model::{normalize_url, NormalizationError};

/// A URL as found in content plus its transport-safe form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub original_url: String,
    pub normalized_url: String,
}

impl ProbeRequest {
    pub fn new(original_url: &str) -> Result<Self, NormalizationError> {
        Ok(Self {
            original_url: original_url.to_string(),
            normalized_url: normalize_url(original_url)?,
        })
    }
}

/// Outcome of a single probe attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable { status: u16 },
    Unreachable(Failure),
}

impl ProbeOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable { .. })
    }
}

/// Perform one request and interpret the result.
pub fn probe<T: Transport + ?Sized>(transport: &T, request: &HttpRequest<'_>) -> ProbeOutcome {
    let outcome = interpret(transport.execute(request));
    tracing::debug!(
        url = request.url,
        method = %request.method,
        reachable = outcome.is_reachable(),
        "probe finished"
    );
    outcome
}

/// Map a transport result onto the failure taxonomy.
///
/// Status codes below 300 are reachable; everything else is a failure.
pub fn interpret(result: Result<u16, TransportError>) -> ProbeOutcome {
    let failure = match result {
        Ok(status) if status < 300 => return ProbeOutcome::Reachable { status },
        Ok(status) => Failure::status(status),
        Err(TransportError::TooManyRedirects(msg)) => Failure::new(ErrorKind::Loop, msg),
        Err(TransportError::ClientError {
            status: Some(code),
            message,
        }) => Failure::new(ErrorKind::Status(code), message),
        Err(TransportError::ClientError {
            status: None,
            message,
        }) => Failure::new(ErrorKind::Unknown, message),
        Err(TransportError::Timeout(msg) | TransportError::Request(msg)) => {
            Failure::new(ErrorKind::Network, msg)
        }
        Err(TransportError::Other(msg)) => Failure::new(ErrorKind::Exception, msg),
    };
    ProbeOutcome::Unreachable(failure)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(result: Result<u16, TransportError>) -> Failure {
        match interpret(result) {
            ProbeOutcome::Unreachable(f) => f,
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn below_300_is_reachable() {
        assert_eq!(interpret(Ok(200)), ProbeOutcome::Reachable { status: 200 });
        assert_eq!(interpret(Ok(206)), ProbeOutcome::Reachable { status: 206 });
        assert!(interpret(Ok(299)).is_reachable());
    }

    #[test]
    fn status_300_and_up_is_failure_keyed_by_code() {
        let f = failure(Ok(300));
        assert_eq!(f.kind, ErrorKind::Status(300));
        assert_eq!(f.status_code, Some(300));

        let f = failure(Ok(404));
        assert_eq!(f.kind, ErrorKind::Status(404));
        assert_eq!(f.status_code, Some(404));
    }

    #[test]
    fn too_many_redirects_is_loop() {
        let f = failure(Err(TransportError::TooManyRedirects("max 5".to_string())));
        assert_eq!(f.kind, ErrorKind::Loop);
        assert_eq!(f.raw_message.as_deref(), Some("max 5"));
        assert_eq!(f.status_code, None);
    }

    #[test]
    fn client_error_with_and_without_response() {
        let f = failure(Err(TransportError::ClientError {
            status: Some(410),
            message: "gone".to_string(),
        }));
        assert_eq!(f.kind, ErrorKind::Status(410));
        assert_eq!(f.status_code, Some(410));

        let f = failure(Err(TransportError::ClientError {
            status: None,
            message: "no response".to_string(),
        }));
        assert_eq!(f.kind, ErrorKind::Unknown);
        assert_eq!(f.status_code, None);
    }

    #[test]
    fn request_level_errors_are_network() {
        let f = failure(Err(TransportError::Request("refused".to_string())));
        assert_eq!(f.kind, ErrorKind::Network);
        let f = failure(Err(TransportError::Timeout("slow".to_string())));
        assert_eq!(f.kind, ErrorKind::Network);
    }

    #[test]
    fn other_errors_are_exception_with_message() {
        let f = failure(Err(TransportError::Other("Unsupported protocol".to_string())));
        assert_eq!(f.kind, ErrorKind::Exception);
        assert_eq!(f.raw_message.as_deref(), Some("Unsupported protocol"));
    }

    #[test]
    fn probe_request_keeps_original() {
        let req = ProbeRequest::new("http://bücher.example/").unwrap();
        assert_eq!(req.original_url, "http://bücher.example/");
        assert_eq!(req.normalized_url, "http://xn--bcher-kva.example/");
    }
}
