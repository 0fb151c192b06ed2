pub mod config;
pub mod logging;

pub mod checker;
pub mod classify;
pub mod probe;
pub mod transport;
pub mod url_model;

pub use checker::{LinkChecker, ReferenceContext};
pub use classify::{ErrorDetail, ErrorKind, MessageTemplates};
pub use probe::ProbeResult;
