//! URL modeling for link checks.
//!
//! Converts internationalized hosts to their ASCII-compatible (punycode)
//! form before anything touches the network, and tags extracted text tokens
//! that carry an `http`/`https` URL.

mod idn;
mod link_type;

pub use idn::{normalize_url, NormalizationError};
pub use link_type::{extract_urls, fetch_type, EXTERNAL};
