use level_core::{
    EntityId, EntityOracle, EntityRecord, EntityStats, Grid, GridOracle, PlacementKind,
    PlacementPlanner, PlanError, Position,
};

/// Registry holding records in a dense vector indexed by `id - 1`.
struct DenseRoster(Vec<EntityRecord>);

impl EntityOracle for DenseRoster {
    fn lookup(&self, id: EntityId) -> Option<&EntityRecord> {
        let index = id.get().checked_sub(1)? as usize;
        self.0.get(index)
    }
}

/// Store with exactly one grid.
struct SingleGrid(&'static str, Grid);

impl GridOracle for SingleGrid {
    fn grid(&self, name: &str) -> Option<&Grid> {
        (name == self.0).then_some(&self.1)
    }
}

fn roster() -> DenseRoster {
    DenseRoster(vec![
        EntityRecord::new(1, "Slime", EntityStats::new(10, 2, 1, 5), "SlimePrefab"),
        EntityRecord::new(2, "Bat", EntityStats::new(6, 3, 0, 4), "BatPrefab"),
    ])
}

#[test]
fn planner_works_through_any_oracle() {
    let store = SingleGrid(
        "Arena",
        Grid::new(vec![vec!["E2".into(), "4".into()], vec!["E1".into()]]),
    );
    let roster = roster();

    let plan = PlacementPlanner::plan("Arena", &store, &roster).unwrap();
    let names: Vec<_> = plan.placements().iter().map(|p| p.object_name()).collect();
    assert_eq!(names, vec!["BatPrefab_(0,0)", "StairDown_(1,0)", "SlimePrefab_(0,1)"]);
    assert_eq!(plan.placements()[2].position(), Position::new(0, 1));
    assert_eq!(plan.placements()[2].kind(), PlacementKind::Enemy);
}

#[test]
fn dyn_oracles_are_accepted() {
    let store = SingleGrid("Arena", Grid::new(vec![vec!["1".into()]]));
    let roster = roster();
    let store: &dyn GridOracle = &store;
    let roster: &dyn EntityOracle = &roster;

    assert!(PlacementPlanner::plan("Arena", store, roster).is_ok());
    assert_eq!(
        PlacementPlanner::plan("Other", store, roster).unwrap_err(),
        PlanError::GridNotLoaded {
            name: "Other".into()
        }
    );
}
