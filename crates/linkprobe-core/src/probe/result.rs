use serde::Serialize;

use crate::classify::ErrorDetail;

/// Final verdict for one URL. `error_detail` is present iff the link is not valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_detail: Option<ErrorDetail>,
}

impl ProbeResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error_detail: None,
        }
    }

    pub fn invalid(detail: ErrorDetail) -> Self {
        Self {
            valid: false,
            error_detail: Some(detail),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error_detail(&self) -> Option<&ErrorDetail> {
        self.error_detail.as_ref()
    }
}
