//! `linkprobe normalize <url>` – show the ASCII-compatible form of a URL.

use linkprobe_core::url_model::normalize_url;

/// Returns `false` when the URL cannot be normalized.
pub fn run_normalize(url: &str) -> bool {
    match normalize_url(url) {
        Ok(normalized) => {
            println!("{normalized}");
            true
        }
        Err(e) => {
            eprintln!("cannot normalize {url}: {e}");
            false
        }
    }
}
