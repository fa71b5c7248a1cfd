use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{SourceError, TextSource};

/// Reads resources as `<root>/<resource>.<extension>` files.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
}

impl DirectorySource {
    pub const DEFAULT_EXTENSION: &'static str = "csv";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: Self::DEFAULT_EXTENSION.to_owned(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path a resource id translates to.
    pub fn path_for(&self, resource: &str) -> PathBuf {
        if self.extension.is_empty() {
            self.root.join(resource)
        } else {
            self.root.join(format!("{}.{}", resource, self.extension))
        }
    }
}

impl TextSource for DirectorySource {
    fn load_text(&self, resource: &str) -> Result<String, SourceError> {
        let path = self.path_for(resource);
        std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                SourceError::NotFound(path.display().to_string())
            } else {
                SourceError::Io {
                    resource: path.display().to_string(),
                    source,
                }
            }
        })
    }
}
