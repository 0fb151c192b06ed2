//! `linkprobe classify <text>` – detect external link tokens in text.

use linkprobe_core::url_model::{extract_urls, fetch_type, EXTERNAL};

/// Prints the link type and any URLs found. Always succeeds.
pub fn run_classify(text: &str) -> bool {
    let link_type = fetch_type(text, "none");
    println!("type: {link_type}");
    if link_type == EXTERNAL {
        for url in extract_urls(text) {
            println!("  {url}");
        }
    }
    true
}
