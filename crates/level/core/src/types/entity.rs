//! Entity records loaded from attribute tables.
//!
//! A record describes one kind of placeable creature: its stats and the
//! presentation key the rendering collaborator uses to pick a visual asset.
//! Records are created once at table-load time and never mutated.

use super::EntityId;

/// Numeric attributes of an entity record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityStats {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    /// Experience awarded when the entity is defeated.
    pub experience: i32,
}

impl EntityStats {
    pub const fn new(health: i32, attack: i32, defense: i32, experience: i32) -> Self {
        Self {
            health,
            attack,
            defense,
            experience,
        }
    }
}

/// One row of an entity attribute table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRecord {
    pub id: EntityId,
    pub name: String,
    pub stats: EntityStats,
    /// Names the visual asset that represents this entity.
    pub presentation_key: String,
}

impl EntityRecord {
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        stats: EntityStats,
        presentation_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats,
            presentation_key: presentation_key.into(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn presentation_key(&self) -> &str {
        &self.presentation_key
    }
}
