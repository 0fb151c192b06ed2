//! Detects text tokens that should be routed to the external link check.

use regex::Regex;
use std::sync::LazyLock;

/// Link type tag for tokens carrying an `http`/`https` URL.
pub const EXTERNAL: &str = "external";

static URL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://[^\s<>]+").expect("URL token pattern is valid"));

/// Returns [`EXTERNAL`] when `candidate` contains an `http://` or `https://`
/// URL, otherwise hands `current` back unchanged. Pure text check; no
/// network access.
pub fn fetch_type<'a>(candidate: &str, current: &'a str) -> &'a str {
    if URL_TOKEN.is_match(candidate) {
        EXTERNAL
    } else {
        current
    }
}

/// All `http`/`https` URL tokens in `candidate`, in order of appearance.
pub fn extract_urls(candidate: &str) -> Vec<&str> {
    URL_TOKEN.find_iter(candidate).map(|m| m.as_str()).collect()
}
