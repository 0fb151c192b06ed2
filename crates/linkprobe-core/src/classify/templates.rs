use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use super::{ErrorDetail, ErrorKind, UnknownErrorKind};

/// Key under which an override map may replace the fallback template.
pub const DEFAULT_KEY: &str = "default";

/// Kind-key → template table plus the fallback template.
///
/// Templates may use `{code}` (the status code, or the kind key when there is
/// no code) and `{message}` (the raw transport text, empty when absent).
/// Only `300`, `403`, `404`, `500`, `loop`, `exception` and `network` have
/// dedicated templates out of the box; every other kind uses the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplates {
    by_kind: HashMap<String, String>,
    fallback: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        let by_kind = [
            ("300", "External link returned HTTP error {code}"),
            ("403", "Forbidden (403)"),
            ("404", "Page not found (404)"),
            ("500", "Internal server error (500)"),
            ("loop", "Redirect loop or too many redirects: {message}"),
            ("exception", "Exception while checking the link: {message}"),
            ("network", "Network error: the server could not be reached"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self {
            by_kind,
            fallback: "HTTP status {code} returned: {message}".to_string(),
        }
    }
}

impl MessageTemplates {
    /// Defaults with `overrides` applied. Keys are error-kind keys or
    /// `"default"` for the fallback template.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, UnknownErrorKind> {
        let mut templates = Self::default();
        for (key, template) in overrides {
            templates.set(key, template.clone())?;
        }
        Ok(templates)
    }

    /// Replace one template. `key` must be a valid kind key or `"default"`.
    pub fn set(&mut self, key: &str, template: String) -> Result<(), UnknownErrorKind> {
        if key == DEFAULT_KEY {
            self.fallback = template;
            return Ok(());
        }
        let kind: ErrorKind = key.parse()?;
        self.by_kind.insert(kind.key().into_owned(), template);
        Ok(())
    }

    /// Render the message for a failure.
    pub fn render(
        &self,
        kind: &ErrorKind,
        status_code: Option<u16>,
        raw_message: Option<&str>,
    ) -> String {
        let key = kind.key();
        let template = self.by_kind.get(&*key).unwrap_or(&self.fallback);
        let code = status_code.map_or_else(|| key.to_string(), |c| c.to_string());
        let message = raw_message.unwrap_or_default();
        let template = if message.is_empty() {
            // No text to show: drop the separator that would introduce it.
            Cow::Owned(template.replace(": {message}", ""))
        } else {
            Cow::Borrowed(template.as_str())
        };
        template.replace("{code}", &code).replace("{message}", message)
    }

    /// Re-render an existing detail (e.g. one loaded from an older report).
    pub fn render_detail(&self, detail: &ErrorDetail) -> String {
        self.render(&detail.kind, detail.status_code, detail.raw_message.as_deref())
    }
}
