//! Level content loading.
//!
//! This crate reads human-authored delimited text and turns it into the
//! `level-core` model:
//! - Attribute tables (enemy stats) parsed into an [`EntityRegistry`]
//! - Symbol grids parsed into a [`GridStore`] keyed by grid name
//! - Level configuration (delimiter, duplicate policy, grid list) from TOML
//!
//! [`Session`] is the composition root: it loads everything once and then
//! plans grids against the loaded data. Text is obtained through the
//! [`TextSource`] trait, so loaders never depend on a concrete file layout.

pub mod loaders;
pub mod registry;
pub mod session;
pub mod sources;
pub mod store;

pub use loaders::{
    AttributeTableParser, ConfigLoader, ContentFactory, GridParser, LevelConfig, TableLoad,
    TableSchema,
};
pub use registry::EntityRegistry;
pub use session::Session;
pub use sources::{DirectorySource, MemorySource, SourceError, TextSource};
pub use store::GridStore;
