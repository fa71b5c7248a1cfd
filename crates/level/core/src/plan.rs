//! Placement planning over a named grid.
//!
//! The planner walks a grid top-to-bottom and left-to-right, resolves every
//! cell, and returns the placements in that order. Downstream collaborators
//! derive object names from insertion order, so ordering is part of the
//! contract. Planning touches no presentation system.

use std::collections::BTreeMap;

use crate::diagnostic::Diagnostic;
use crate::env::{EntityOracle, GridOracle};
use crate::error::{ErrorSeverity, LevelError};
use crate::resolve::SymbolResolver;
use crate::types::{Grid, Placement, PlacementKind};

/// Hard failures of a planning call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Planning was requested for a grid name that was never successfully loaded.
    #[error("grid '{name}' is not loaded")]
    GridNotLoaded { name: String },
}

impl LevelError for PlanError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            PlanError::GridNotLoaded { .. } => "PLAN_GRID_NOT_LOADED",
        }
    }
}

/// Ordered placements for one grid plus the diagnostics of cells that
/// produced none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan<'r> {
    grid_name: String,
    rows: usize,
    placements: Vec<Placement<'r>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'r> Plan<'r> {
    pub fn grid_name(&self) -> &str {
        &self.grid_name
    }

    /// Number of grid rows walked.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn placements(&self) -> &[Placement<'r>] {
        &self.placements
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of placements per kind.
    pub fn counts(&self) -> BTreeMap<PlacementKind, usize> {
        let mut counts = BTreeMap::new();
        for placement in &self.placements {
            *counts.entry(placement.kind()).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_placements(self) -> Vec<Placement<'r>> {
        self.placements
    }
}

/// Builds placement plans from loaded grids.
pub struct PlacementPlanner;

impl PlacementPlanner {
    /// Plans the grid stored under `grid_name`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::GridNotLoaded`] when `store` has no grid under
    /// that name. Per-cell problems never fail the call; they are collected
    /// in [`Plan::diagnostics`].
    pub fn plan<'r, G, O>(grid_name: &str, store: &G, registry: &'r O) -> Result<Plan<'r>, PlanError>
    where
        G: GridOracle + ?Sized,
        O: EntityOracle + ?Sized,
    {
        let grid = store.grid(grid_name).ok_or_else(|| PlanError::GridNotLoaded {
            name: grid_name.to_owned(),
        })?;
        Ok(Self::plan_grid(grid_name, grid, registry))
    }

    /// Plans an already-fetched grid.
    pub fn plan_grid<'r, O>(grid_name: &str, grid: &Grid, registry: &'r O) -> Plan<'r>
    where
        O: EntityOracle + ?Sized,
    {
        let mut placements = Vec::new();
        let mut diagnostics = Vec::new();

        for (position, cell) in grid.cells() {
            let resolution = SymbolResolver::resolve(cell, position.x, position.y, registry);
            if let Some(placement) = resolution.placement(position) {
                placements.push(placement);
            }
            if let Some(diagnostic) = resolution.diagnostic {
                diagnostic.report();
                diagnostics.push(diagnostic);
            }
        }

        tracing::info!(
            "Planned grid '{}': {} rows, {} placements, {} diagnostics",
            grid_name,
            grid.row_count(),
            placements.len(),
            diagnostics.len()
        );

        Plan {
            grid_name: grid_name.to_owned(),
            rows: grid.row_count(),
            placements,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::diagnostic::UnresolvedReason;
    use crate::types::{EntityId, EntityRecord, EntityStats, Position};

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }

    fn registry() -> HashMap<EntityId, EntityRecord> {
        let slime = EntityRecord::new(1, "Slime", EntityStats::new(10, 2, 1, 5), "SlimePrefab");
        HashMap::from([(slime.id, slime)])
    }

    #[test]
    fn missing_grid_is_a_hard_failure() {
        let store: HashMap<String, Grid> = HashMap::new();
        let registry = registry();
        let error = PlacementPlanner::plan("Missing", &store, &registry).unwrap_err();
        assert_eq!(
            error,
            PlanError::GridNotLoaded {
                name: "Missing".into()
            }
        );
        assert_eq!(error.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn placements_follow_row_major_order() {
        let registry = registry();
        let store = HashMap::from([("A".to_string(), grid(&[&["1", "0"], &["0", "E1"]]))]);

        let plan = PlacementPlanner::plan("A", &store, &registry).unwrap();
        let summary: Vec<_> = plan
            .placements()
            .iter()
            .map(|p| (p.kind(), p.position()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (PlacementKind::Wall, Position::new(0, 0)),
                (PlacementKind::Floor, Position::new(1, 0)),
                (PlacementKind::Floor, Position::new(0, 1)),
                (PlacementKind::Enemy, Position::new(1, 1)),
            ]
        );
        assert_eq!(plan.placements()[3].entity().unwrap().name, "Slime");
        assert!(plan.is_clean());
    }

    #[test]
    fn unresolved_cells_are_omitted_and_reported() {
        let registry = registry();
        let plan = PlacementPlanner::plan_grid("B", &grid(&[&["", "Q", "E7", "2"]]), &registry);

        assert_eq!(plan.placements().len(), 1);
        assert_eq!(plan.placements()[0].kind(), PlacementKind::Chest);
        assert_eq!(plan.placements()[0].position(), Position::new(3, 0));

        let reasons: Vec<_> = plan
            .diagnostics()
            .iter()
            .filter_map(Diagnostic::unresolved_reason)
            .collect();
        assert_eq!(
            reasons,
            vec![
                UnresolvedReason::Unrecognized,
                UnresolvedReason::MissingEntity(EntityId(7)),
            ]
        );
    }

    #[test]
    fn counts_tally_by_kind() {
        let registry = registry();
        let plan = PlacementPlanner::plan_grid("C", &grid(&[&["1", "1", "1"], &["0", "3"]]), &registry);
        let counts = plan.counts();
        assert_eq!(counts.get(&PlacementKind::Wall), Some(&3));
        assert_eq!(counts.get(&PlacementKind::Floor), Some(&1));
        assert_eq!(counts.get(&PlacementKind::StairUp), Some(&1));
        assert_eq!(plan.rows(), 2);
    }
}
