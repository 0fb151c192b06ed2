/// Where a URL was found. Opaque to the checker; it only travels into log
/// records so broken links can be traced back to their source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceContext {
    /// Document or record the URL was extracted from.
    pub source: Option<String>,
    /// Field within the source.
    pub field: Option<String>,
}

impl ReferenceContext {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            field: None,
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}
