//! Traits describing read-only level data.
//!
//! Oracles expose the entity table and the loaded grids to the resolver and
//! the planner without coupling them to the concrete stores in
//! `level-content`. Implementations are populated once and never mutated
//! while a planning pass holds a reference.
use std::collections::HashMap;

use crate::types::{EntityId, EntityRecord, Grid};

/// Lookup of entity records by numeric id.
pub trait EntityOracle: Send + Sync {
    /// Returns the record for `id`, or `None` on a miss. Never fails.
    fn lookup(&self, id: EntityId) -> Option<&EntityRecord>;
}

/// Lookup of parsed grids by name.
pub trait GridOracle: Send + Sync {
    /// Returns the grid loaded under `name`, or `None` if it was never loaded.
    fn grid(&self, name: &str) -> Option<&Grid>;
}

impl EntityOracle for HashMap<EntityId, EntityRecord> {
    fn lookup(&self, id: EntityId) -> Option<&EntityRecord> {
        self.get(&id)
    }
}

impl GridOracle for HashMap<String, Grid> {
    fn grid(&self, name: &str) -> Option<&Grid> {
        self.get(name)
    }
}
