//! Session: the composition root that loads content once and plans grids.
//!
//! Loading happens entirely inside [`Session::load`]; afterwards the
//! registry and grid store are only reachable through shared references, so
//! every plan observes fully populated data. Reloading a grid needs
//! `&mut Session`, which the borrow checker forbids while any [`Plan`]
//! borrowed from the session is alive.

use level_core::{Diagnostic, PlacementPlanner, Plan, PlanError};

use crate::loaders::LevelConfig;
use crate::registry::EntityRegistry;
use crate::sources::TextSource;
use crate::store::GridStore;

/// Loaded level content for one session.
#[derive(Debug)]
pub struct Session {
    registry: EntityRegistry,
    grids: GridStore,
    diagnostics: Vec<Diagnostic>,
    default_grid: Option<String>,
}

impl Session {
    /// Loads the enemy table from `tables`, then every configured grid from `grids`.
    ///
    /// Missing resources and malformed rows never fail the session; they are
    /// collected in [`Session::diagnostics`].
    pub fn load<T, G>(tables: &T, grids: &G, config: &LevelConfig) -> Self
    where
        T: TextSource + ?Sized,
        G: TextSource + ?Sized,
    {
        let options = config.parse_options();
        let mut diagnostics = Vec::new();

        let (registry, table_diagnostics) =
            EntityRegistry::load(tables, &config.enemy_table, options);
        diagnostics.extend(table_diagnostics);

        let mut store = GridStore::new(options);
        diagnostics.extend(store.load_all(grids, &config.grids));

        tracing::info!(
            "Session ready: {} entities, {} grids, {} diagnostics",
            registry.len(),
            store.len(),
            diagnostics.len()
        );

        Self {
            registry,
            grids: store,
            diagnostics,
            default_grid: config.default_grid().map(str::to_owned),
        }
    }

    /// Assembles a session from already-built parts.
    pub fn from_parts(registry: EntityRegistry, grids: GridStore) -> Self {
        Self {
            registry,
            grids,
            diagnostics: Vec::new(),
            default_grid: None,
        }
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn grids(&self) -> &GridStore {
        &self.grids
    }

    /// Diagnostics collected while loading tables and grids.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn default_grid(&self) -> Option<&str> {
        self.default_grid.as_deref()
    }

    /// Plans the grid loaded under `name`.
    ///
    /// # Errors
    ///
    /// [`PlanError::GridNotLoaded`] when `name` was never successfully loaded.
    pub fn plan(&self, name: &str) -> Result<Plan<'_>, PlanError> {
        PlacementPlanner::plan(name, &self.grids, &self.registry)
    }

    /// Plans the configured target grid.
    ///
    /// # Errors
    ///
    /// [`PlanError::GridNotLoaded`] when no target is configured or it failed to load.
    pub fn plan_default(&self) -> Result<Plan<'_>, PlanError> {
        let name = self.default_grid.as_deref().unwrap_or_default();
        self.plan(name)
    }

    /// Reloads one grid, replacing or rejecting per the configured policy.
    ///
    /// # Errors
    ///
    /// Returns the diagnostic of a failed reload; it is also recorded in
    /// [`Session::diagnostics`].
    pub fn reload_grid<S>(&mut self, source: &S, name: &str) -> Result<(), Diagnostic>
    where
        S: TextSource + ?Sized,
    {
        self.grids.load(source, name).inspect_err(|diagnostic| {
            self.diagnostics.push(diagnostic.clone());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MemorySource;
    use level_core::PlacementKind;

    #[test]
    fn reload_is_visible_to_later_plans() {
        let config = LevelConfig {
            grids: vec!["A".into()],
            ..LevelConfig::default()
        };
        let source = MemorySource::new().with("A", "1,1");
        let mut session = Session::load(&source, &source, &config);
        assert_eq!(session.plan("A").unwrap().placements().len(), 2);

        let update = MemorySource::new().with("A", "0");
        session.reload_grid(&update, "A").unwrap();

        let plan = session.plan("A").unwrap();
        assert_eq!(plan.placements().len(), 1);
        assert_eq!(plan.placements()[0].kind(), PlacementKind::Floor);
    }

    #[test]
    fn default_grid_without_configuration_is_not_loaded() {
        let session = Session::from_parts(EntityRegistry::default(), GridStore::default());
        assert_eq!(
            session.plan_default().unwrap_err(),
            PlanError::GridNotLoaded { name: String::new() }
        );
    }
}
