use std::collections::HashMap;

use super::{SourceError, TextSource};

/// In-memory resources keyed by id.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    resources: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, resource: impl Into<String>, text: impl Into<String>) {
        self.resources.insert(resource.into(), text.into());
    }

    /// Adds a resource (builder pattern).
    #[must_use]
    pub fn with(mut self, resource: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(resource, text);
        self
    }
}

impl TextSource for MemorySource {
    fn load_text(&self, resource: &str) -> Result<String, SourceError> {
        self.resources
            .get(resource)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(resource.to_owned()))
    }
}
