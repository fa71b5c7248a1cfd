//! Text sources: the resource-loading collaborator consumed by the loaders.
//!
//! A source maps a resource id (a grid or table name) to its raw text. How
//! ids translate to files or bundled assets is the source's concern; the
//! parsers only ever see text.

mod directory;
mod memory;

pub use directory::DirectorySource;
pub use memory::MemorySource;

use level_core::Diagnostic;
use thiserror::Error;

/// Failures reading a named text resource.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("resource '{0}' not found")]
    NotFound(String),

    #[error("failed to read resource '{resource}': {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound(_))
    }

    /// Converts the failure into the diagnostic attached to load results.
    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            SourceError::NotFound(resource) => Diagnostic::ResourceNotFound { resource },
            SourceError::Io { resource, source } => Diagnostic::ResourceUnreadable {
                resource,
                message: source.to_string(),
            },
        }
    }
}

/// Reads named text resources.
pub trait TextSource {
    /// Returns the full text of `resource`.
    ///
    /// # Errors
    ///
    /// [`SourceError::NotFound`] when the resource does not exist; other
    /// failures are reported as [`SourceError::Io`].
    fn load_text(&self, resource: &str) -> Result<String, SourceError>;
}

impl<S: TextSource + ?Sized> TextSource for &S {
    fn load_text(&self, resource: &str) -> Result<String, SourceError> {
        (**self).load_text(resource)
    }
}
