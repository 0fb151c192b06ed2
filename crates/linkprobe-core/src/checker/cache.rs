//! Per-run memo of probe results.

use std::collections::HashMap;

use crate::probe::ProbeResult;

/// Results keyed by the URL exactly as it appeared in content.
///
/// Entries are never evicted; a cache lives as long as the checker that owns
/// it, i.e. one processing run. Differently spelled originals that normalize
/// to the same URL are distinct keys.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<String, ProbeResult>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, original_url: &str) -> Option<&ProbeResult> {
        self.entries.get(original_url)
    }

    pub fn contains(&self, original_url: &str) -> bool {
        self.entries.contains_key(original_url)
    }

    /// Store a result, replacing any earlier entry for the same URL.
    pub fn insert(&mut self, original_url: impl Into<String>, result: ProbeResult) {
        self.entries.insert(original_url.into(), result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of cached results that are broken links.
    pub fn broken_count(&self) -> usize {
        self.entries.values().filter(|r| !r.is_valid()).count()
    }
}
