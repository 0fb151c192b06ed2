//! Link checker: cache lookup, normalization, HEAD-then-ranged-GET fallback.
//!
//! A [`LinkChecker`] owns its transport, message templates and result cache.
//! It is meant to live for one processing run; run several instances for
//! parallelism; they share nothing.

mod cache;
mod context;

pub use cache::ResultCache;
pub use context::ReferenceContext;

use crate::classify::{ErrorDetail, ErrorKind, Failure, MessageTemplates};
use crate::config::ProberConfig;
use crate::probe::{probe, ProbeOutcome, ProbeRequest, ProbeResult};
use crate::transport::{CurlTransport, HttpRequest, Transport};

/// Default number of body bytes requested by the GET fallback.
pub const DEFAULT_RANGE_BYTES: u64 = 4096;

/// Checks external links, memoizing one result per original URL.
#[derive(Debug)]
pub struct LinkChecker<T = CurlTransport> {
    transport: T,
    templates: MessageTemplates,
    range_bytes: u64,
    cache: ResultCache,
}

impl LinkChecker<CurlTransport> {
    /// Checker backed by libcurl, configured from `cfg`.
    pub fn from_config(cfg: &ProberConfig) -> anyhow::Result<Self> {
        cfg.validate()?;
        Ok(Self::new(
            CurlTransport::new(cfg.transport_settings()),
            cfg.message_templates()?,
        )
        .with_range_bytes(cfg.range_bytes))
    }
}

impl<T: Transport> LinkChecker<T> {
    pub fn new(transport: T, templates: MessageTemplates) -> Self {
        Self {
            transport,
            templates,
            range_bytes: DEFAULT_RANGE_BYTES,
            cache: ResultCache::new(),
        }
    }

    #[must_use]
    pub fn with_range_bytes(mut self, range_bytes: u64) -> Self {
        self.range_bytes = range_bytes.max(1);
        self
    }

    /// Check `original_url`, serving repeats from the cache.
    ///
    /// Never fails: normalization and transport problems come back as an
    /// invalid [`ProbeResult`] carrying an [`ErrorDetail`].
    pub fn check(&mut self, original_url: &str) -> ProbeResult {
        if let Some(hit) = self.cache.get(original_url) {
            tracing::debug!(url = original_url, valid = hit.is_valid(), "cache hit");
            return hit.clone();
        }

        let result = self.probe_uncached(original_url);
        self.cache.insert(original_url, result.clone());
        result
    }

    /// Boolean entry point used by content validation. `context` only feeds
    /// the log record; details of a failure are available via
    /// [`LinkChecker::last_error`].
    pub fn check_link(&mut self, original_url: &str, context: &ReferenceContext) -> bool {
        let span = tracing::debug_span!(
            "check_link",
            url = original_url,
            source = context.source.as_deref(),
            field = context.field.as_deref(),
        );
        let _guard = span.enter();
        let result = self.check(original_url);
        if let Some(detail) = result.error_detail() {
            tracing::info!(kind = %detail.kind, message = %detail.rendered_message, "broken link");
        }
        result.is_valid()
    }

    /// Error detail recorded for `original_url` during this run, if it failed.
    pub fn last_error(&self, original_url: &str) -> Option<&ErrorDetail> {
        self.cache.get(original_url)?.error_detail()
    }

    /// Human-readable message for `detail`, rendered with this checker's templates.
    pub fn error_message(&self, detail: &ErrorDetail) -> String {
        self.templates.render_detail(detail)
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn templates(&self) -> &MessageTemplates {
        &self.templates
    }

    fn probe_uncached(&self, original_url: &str) -> ProbeResult {
        let request = match ProbeRequest::new(original_url) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(url = original_url, error = %e, "URL normalization failed");
                return self.invalid(Failure::new(ErrorKind::Exception, e.to_string()));
            }
        };
        let url = request.normalized_url.as_str();

        // Many servers reject or mishandle HEAD; a capped GET confirms before
        // the link is reported broken. The GET outcome supersedes the HEAD one.
        let outcome = match probe(&self.transport, &HttpRequest::head(url)) {
            reachable @ ProbeOutcome::Reachable { .. } => reachable,
            ProbeOutcome::Unreachable(head_failure) => {
                tracing::debug!(url, kind = %head_failure.kind, "HEAD failed, retrying with ranged GET");
                probe(
                    &self.transport,
                    &HttpRequest::ranged_get(url, self.range_bytes),
                )
            }
        };

        match outcome {
            ProbeOutcome::Reachable { .. } => ProbeResult::valid(),
            ProbeOutcome::Unreachable(failure) => self.invalid(failure),
        }
    }

    fn invalid(&self, failure: Failure) -> ProbeResult {
        ProbeResult::invalid(ErrorDetail::from_failure(failure, &self.templates))
    }
}
