//! Named grid store implementing [`level_core::GridOracle`].
use std::collections::{BTreeMap, BTreeSet};

use level_core::{Diagnostic, DuplicatePolicy, Grid, GridOracle, KeyScope, ParseOptions};

use crate::loaders::GridParser;
use crate::sources::TextSource;

/// Parsed grids keyed by name.
///
/// A name absent from the store means "not loaded", which is distinct from a
/// grid that loaded with no rows. Each load is independent: one failing name
/// never prevents later names from loading.
#[derive(Clone, Debug, Default)]
pub struct GridStore {
    grids: BTreeMap<String, Grid>,
    parser: GridParser,
    duplicates: DuplicatePolicy,
}

impl GridStore {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            grids: BTreeMap::new(),
            parser: GridParser::new(options.delimiter),
            duplicates: options.duplicates,
        }
    }

    /// Reads grid `name` from `source`, parses it, and stores it under `name`.
    ///
    /// Under [`DuplicatePolicy::Overwrite`] a reload replaces the previous
    /// grid in full.
    ///
    /// # Errors
    ///
    /// Returns the diagnostic when the resource is missing or unreadable, or
    /// when the name is already loaded under [`DuplicatePolicy::Reject`]. The
    /// store is left unchanged in both cases.
    pub fn load<S>(&mut self, source: &S, name: &str) -> Result<(), Diagnostic>
    where
        S: TextSource + ?Sized,
    {
        let text = source.load_text(name).map_err(|err| {
            let diagnostic = err.into_diagnostic();
            diagnostic.report();
            diagnostic
        })?;
        let grid = self.parser.parse(name, &text);
        self.insert(name, grid)
    }

    /// Loads every name in order and returns the diagnostics of the ones that failed.
    pub fn load_all<S, I>(&mut self, source: &S, names: I) -> Vec<Diagnostic>
    where
        S: TextSource + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut diagnostics = Vec::new();
        let mut requested = 0usize;
        for name in names {
            requested += 1;
            if let Err(diagnostic) = self.load(source, name.as_ref()) {
                diagnostics.push(diagnostic);
            }
        }

        if requested == 0 {
            tracing::warn!("No grid names configured; grid store is empty");
        } else {
            tracing::info!(
                "Grid loading complete: {} requested, {} loaded",
                requested,
                self.grids.len()
            );
        }
        diagnostics
    }

    /// Stores an already-parsed grid under `name`, following the duplicate policy.
    ///
    /// # Errors
    ///
    /// Returns a `DuplicateKey` diagnostic under [`DuplicatePolicy::Reject`]
    /// when `name` is already loaded.
    pub fn insert(&mut self, name: impl Into<String>, grid: Grid) -> Result<(), Diagnostic> {
        let name = name.into();
        if self.duplicates == DuplicatePolicy::Reject && self.grids.contains_key(&name) {
            let diagnostic = Diagnostic::DuplicateKey {
                scope: KeyScope::Grid,
                key: name,
            };
            diagnostic.report();
            return Err(diagnostic);
        }

        if self.grids.insert(name.clone(), grid).is_some() {
            tracing::debug!("Grid '{}' replaced by reload", name);
        }
        Ok(())
    }

    /// Returns the grid loaded under `name`.
    ///
    /// A miss logs a warning and returns `None`.
    pub fn get(&self, name: &str) -> Option<&Grid> {
        let grid = self.grids.get(name);
        if grid.is_none() {
            tracing::warn!("Grid '{}' is not loaded", name);
        }
        grid
    }

    pub fn contains(&self, name: &str) -> bool {
        self.grids.contains_key(name)
    }

    /// Names of all loaded grids.
    pub fn loaded_names(&self) -> BTreeSet<&str> {
        self.grids.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

impl GridOracle for GridStore {
    fn grid(&self, name: &str) -> Option<&Grid> {
        self.get(name)
    }
}
