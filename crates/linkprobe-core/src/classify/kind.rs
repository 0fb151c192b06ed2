use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed taxonomy of probe failures.
///
/// Serialized as its string key: the decimal status code for
/// [`ErrorKind::Status`], otherwise `loop`, `unknown`, `network` or `exception`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ErrorKind {
    /// Final response status >= 300, or a client error carrying a response.
    Status(u16),
    /// Redirect loop / redirect cap exceeded.
    Loop,
    /// Client error without a usable response.
    Unknown,
    /// No response obtained (connect, DNS, TLS, timeout).
    Network,
    /// Anything unexpected, including URL normalization failures.
    Exception,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error kind: {0}")]
pub struct UnknownErrorKind(pub String);

impl ErrorKind {
    /// Stable lookup key for message templates and reports.
    pub fn key(&self) -> Cow<'static, str> {
        match self {
            ErrorKind::Status(code) => Cow::Owned(code.to_string()),
            ErrorKind::Loop => Cow::Borrowed("loop"),
            ErrorKind::Unknown => Cow::Borrowed("unknown"),
            ErrorKind::Network => Cow::Borrowed("network"),
            ErrorKind::Exception => Cow::Borrowed("exception"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for ErrorKind {
    type Err = UnknownErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "loop" => Ok(ErrorKind::Loop),
            "unknown" => Ok(ErrorKind::Unknown),
            "network" => Ok(ErrorKind::Network),
            "exception" => Ok(ErrorKind::Exception),
            other => other
                .parse::<u16>()
                .map(ErrorKind::Status)
                .map_err(|_| UnknownErrorKind(s.to_string())),
        }
    }
}

impl From<ErrorKind> for String {
    fn from(kind: ErrorKind) -> Self {
        kind.key().into_owned()
    }
}

impl TryFrom<String> for ErrorKind {
    type Error = UnknownErrorKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
