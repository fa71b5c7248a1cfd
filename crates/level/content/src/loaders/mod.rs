//! Content loaders for reading level data.
//!
//! This module provides the parsers that turn delimited text into the
//! `level-core` model, the TOML configuration loader, and the factory that
//! wires them to a data directory.

pub mod config;
pub mod factory;
pub mod grid;
pub mod table;

pub use config::{ConfigLoader, LevelConfig};
pub use factory::ContentFactory;
pub use grid::GridParser;
pub use table::{AttributeTableParser, TableLoad, TableSchema};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Drops a leading UTF-8 byte-order mark, as written by spreadsheet exports.
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
