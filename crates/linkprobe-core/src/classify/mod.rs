//! Error taxonomy and human-readable messages for failed probes.
//!
//! Raw failure signals ([`Failure`]) are produced by the probe executor; the
//! [`MessageTemplates`] table turns them into an [`ErrorDetail`] with a
//! rendered message. Rendering is pure: no network, no global state.

mod kind;
mod templates;

pub use kind::{ErrorKind, UnknownErrorKind};
pub use templates::MessageTemplates;

use serde::{Deserialize, Serialize};

/// Unrendered failure of a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: ErrorKind,
    /// Present when `kind` is a numeric HTTP status.
    pub status_code: Option<u16>,
    /// Underlying transport / exception text.
    pub raw_message: Option<String>,
}

impl Failure {
    /// Response with status >= 300.
    pub fn status(code: u16) -> Self {
        Self {
            kind: ErrorKind::Status(code),
            status_code: Some(code),
            raw_message: None,
        }
    }

    pub fn new(kind: ErrorKind, raw_message: impl Into<String>) -> Self {
        let status_code = match kind {
            ErrorKind::Status(code) => Some(code),
            _ => None,
        };
        Self {
            kind,
            status_code,
            raw_message: Some(raw_message.into()),
        }
    }
}

/// Classified failure as stored in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_message: Option<String>,
    pub rendered_message: String,
}

impl ErrorDetail {
    pub fn from_failure(failure: Failure, templates: &MessageTemplates) -> Self {
        let rendered_message = templates.render(
            &failure.kind,
            failure.status_code,
            failure.raw_message.as_deref(),
        );
        Self {
            kind: failure.kind,
            status_code: failure.status_code,
            raw_message: failure.raw_message,
            rendered_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failure_carries_code() {
        let f = Failure::status(404);
        assert_eq!(f.kind, ErrorKind::Status(404));
        assert_eq!(f.status_code, Some(404));
        assert!(f.raw_message.is_none());
    }

    #[test]
    fn from_failure_renders_message() {
        let templates = MessageTemplates::default();
        let detail = ErrorDetail::from_failure(Failure::status(404), &templates);
        assert_eq!(detail.kind, ErrorKind::Status(404));
        assert_eq!(detail.rendered_message, "Page not found (404)");
    }

    #[test]
    fn detail_serializes_kind_as_key() {
        let templates = MessageTemplates::default();
        let detail = ErrorDetail::from_failure(
            Failure::new(ErrorKind::Loop, "Maximum (5) redirects followed"),
            &templates,
        );
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["kind"], "loop");
        assert!(json.get("status_code").is_none());
        assert_eq!(json["raw_message"], "Maximum (5) redirects followed");

        let back: ErrorDetail = serde_json::from_value(json).unwrap();
        assert_eq!(back, detail);
    }
}
