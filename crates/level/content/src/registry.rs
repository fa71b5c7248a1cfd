//! Entity registry implementing [`level_core::EntityOracle`].
use std::collections::HashMap;

use level_core::{Diagnostic, EntityId, EntityOracle, EntityRecord, ParseOptions};

use crate::loaders::{AttributeTableParser, TableLoad};
use crate::sources::TextSource;

/// Read-only table of entity records keyed by id.
///
/// Built once from a single table load and owned by the session; there is
/// no mutation API after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityRegistry {
    records: HashMap<EntityId, EntityRecord>,
}

impl EntityRegistry {
    pub fn new(records: HashMap<EntityId, EntityRecord>) -> Self {
        Self { records }
    }

    /// Takes the records of a table load. Its diagnostics are dropped;
    /// collect them before converting.
    pub fn from_table(load: TableLoad<EntityRecord>) -> Self {
        Self::new(load.records)
    }

    /// Parses `resource` from `source` into a registry, returning the load
    /// diagnostics alongside it.
    pub fn load<S>(source: &S, resource: &str, options: ParseOptions) -> (Self, Vec<Diagnostic>)
    where
        S: TextSource + ?Sized,
    {
        let mut table: TableLoad<EntityRecord> =
            AttributeTableParser::new(options).load(source, resource);
        let diagnostics = std::mem::take(&mut table.diagnostics);
        (Self::from_table(table), diagnostics)
    }

    /// Returns the record for `id`.
    ///
    /// A miss returns `None`; callers treat it as "skip this placement" and
    /// report it themselves.
    pub fn lookup(&self, id: EntityId) -> Option<&EntityRecord> {
        let record = self.records.get(&id);
        if record.is_none() {
            tracing::debug!("Entity {} not found in registry", id);
        }
        record
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<_> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityRecord> {
        self.records.values()
    }
}

impl FromIterator<EntityRecord> for EntityRegistry {
    /// Later records replace earlier ones with the same id.
    fn from_iter<I: IntoIterator<Item = EntityRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|record| (record.id, record)).collect())
    }
}

impl EntityOracle for EntityRegistry {
    fn lookup(&self, id: EntityId) -> Option<&EntityRecord> {
        EntityRegistry::lookup(self, id)
    }
}
