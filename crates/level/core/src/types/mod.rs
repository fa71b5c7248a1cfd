//! Data model shared by the parsers, the resolver, and the planner.
mod common;
mod entity;
mod grid;
mod placement;

pub use common::{EntityId, Position};
pub use entity::{EntityRecord, EntityStats};
pub use grid::Grid;
pub use placement::{Placement, PlacementKind};
