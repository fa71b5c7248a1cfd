//! Pure level model and placement planning.
//!
//! `level-core` defines the typed description of a level (symbol grids,
//! entity records, placements) and the two pure passes over it:
//! [`SymbolResolver`] maps one cell to a [`PlacementKind`], and
//! [`PlacementPlanner`] walks a whole grid into an ordered [`Plan`].
//! Parsing and text loading live in `level-content`; this crate performs no
//! I/O and never instantiates world objects.
pub mod config;
pub mod diagnostic;
pub mod env;
pub mod error;
pub mod plan;
pub mod resolve;
pub mod types;

pub use config::{DuplicatePolicy, ParseOptions};
pub use diagnostic::{Diagnostic, KeyScope, RowError, UnresolvedReason};
pub use env::{EntityOracle, GridOracle};
pub use error::{ErrorSeverity, LevelError};
pub use plan::{PlacementPlanner, Plan, PlanError};
pub use resolve::{ENEMY_PREFIX, Resolution, SymbolResolver};
pub use types::{EntityId, EntityRecord, EntityStats, Grid, Placement, PlacementKind, Position};
