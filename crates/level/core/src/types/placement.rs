//! Resolved placements handed to the realization collaborator.

use super::{EntityRecord, Position};

/// Closed set of kinds a grid cell can resolve to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementKind {
    Empty,
    Floor,
    Wall,
    Chest,
    StairUp,
    StairDown,
    Enemy,
    Unknown,
}

impl PlacementKind {
    /// Kinds that produce a placement. `Empty` and `Unknown` are non-events.
    pub const fn is_placeable(self) -> bool {
        !matches!(self, Self::Empty | Self::Unknown)
    }
}

/// One resolved cell.
///
/// Enemy placements borrow their record from the registry that resolved
/// them, so a collaborator can label and instantiate the object without a
/// second lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Placement<'r> {
    kind: PlacementKind,
    position: Position,
    entity: Option<&'r EntityRecord>,
}

impl<'r> Placement<'r> {
    /// Creates a static tile placement. Returns `None` for kinds that never
    /// place anything on their own (`Empty`, `Unknown`, `Enemy`).
    pub fn tile(kind: PlacementKind, position: Position) -> Option<Self> {
        match kind {
            PlacementKind::Floor
            | PlacementKind::Wall
            | PlacementKind::Chest
            | PlacementKind::StairUp
            | PlacementKind::StairDown => Some(Self {
                kind,
                position,
                entity: None,
            }),
            PlacementKind::Empty | PlacementKind::Unknown | PlacementKind::Enemy => None,
        }
    }

    pub fn enemy(entity: &'r EntityRecord, position: Position) -> Self {
        Self {
            kind: PlacementKind::Enemy,
            position,
            entity: Some(entity),
        }
    }

    pub fn kind(&self) -> PlacementKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// The resolved record; always `Some` for `Enemy` placements.
    pub fn entity(&self) -> Option<&'r EntityRecord> {
        self.entity
    }

    /// Deterministic object label: `<asset>_(x,y)`.
    ///
    /// Enemies use their presentation key, tiles use the kind name.
    pub fn object_name(&self) -> String {
        let label = match self.entity {
            Some(entity) => entity.presentation_key(),
            None => self.kind.as_ref(),
        };
        format!("{}_{}", label, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityStats;

    #[test]
    fn tile_rejects_non_tile_kinds() {
        let origin = Position::ORIGIN;
        assert!(Placement::tile(PlacementKind::Wall, origin).is_some());
        assert!(Placement::tile(PlacementKind::Enemy, origin).is_none());
        assert!(Placement::tile(PlacementKind::Unknown, origin).is_none());
        assert!(Placement::tile(PlacementKind::Empty, origin).is_none());
    }

    #[test]
    fn object_names_follow_asset_and_coordinate() {
        let slime = EntityRecord::new(1, "Slime", EntityStats::default(), "SlimePrefab");
        let enemy = Placement::enemy(&slime, Position::new(1, 1));
        assert_eq!(enemy.object_name(), "SlimePrefab_(1,1)");

        let stair = Placement::tile(PlacementKind::StairDown, Position::new(4, 0)).unwrap();
        assert_eq!(stair.object_name(), "StairDown_(4,0)");
    }

    #[test]
    fn placeable_kinds() {
        assert!(PlacementKind::Floor.is_placeable());
        assert!(PlacementKind::Enemy.is_placeable());
        assert!(!PlacementKind::Empty.is_placeable());
        assert!(!PlacementKind::Unknown.is_placeable());
    }
}
