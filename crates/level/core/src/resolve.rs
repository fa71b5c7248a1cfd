//! Symbol resolution: maps one raw grid cell to a placement kind.
//!
//! | cell text | kind |
//! |---|---|
//! | `""` | Empty |
//! | `"0"` | Floor |
//! | `"1"` | Wall |
//! | `"2"` | Chest |
//! | `"3"` | StairUp |
//! | `"4"` | StairDown |
//! | `"E<n>"`, n a positive integer | Enemy (id n, looked up in the registry) |
//! | anything else | Unknown |

use crate::diagnostic::{Diagnostic, UnresolvedReason};
use crate::env::EntityOracle;
use crate::types::{EntityId, EntityRecord, Placement, PlacementKind, Position};

/// Prefix marking an enemy symbol.
pub const ENEMY_PREFIX: char = 'E';

/// Outcome of resolving a single cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution<'r> {
    pub kind: PlacementKind,
    /// Set only for `Enemy`.
    pub entity: Option<&'r EntityRecord>,
    /// Set only for `Unknown`.
    pub diagnostic: Option<Diagnostic>,
}

impl<'r> Resolution<'r> {
    fn of(kind: PlacementKind) -> Self {
        Self {
            kind,
            entity: None,
            diagnostic: None,
        }
    }

    fn unresolved(position: Position, raw: &str, reason: UnresolvedReason) -> Self {
        Self {
            kind: PlacementKind::Unknown,
            entity: None,
            diagnostic: Some(Diagnostic::unresolved(position, raw, reason)),
        }
    }

    /// Converts the resolution into a placement at `position`.
    ///
    /// `Empty` and `Unknown` resolutions are non-events and yield `None`.
    pub fn placement(&self, position: Position) -> Option<Placement<'r>> {
        match (self.kind, self.entity) {
            (PlacementKind::Enemy, Some(entity)) => Some(Placement::enemy(entity, position)),
            (kind, _) => Placement::tile(kind, position),
        }
    }
}

/// Stateless resolver of grid symbols.
pub struct SymbolResolver;

impl SymbolResolver {
    /// Resolves `cell` found at `(x, y)`, consulting `registry` for enemies.
    ///
    /// Never fails: unresolvable cells come back as `Unknown` with a
    /// diagnostic naming the coordinate and the raw text.
    pub fn resolve<'r, O>(cell: &str, x: u32, y: u32, registry: &'r O) -> Resolution<'r>
    where
        O: EntityOracle + ?Sized,
    {
        let position = Position::new(x, y);
        match cell {
            "" => Resolution::of(PlacementKind::Empty),
            "0" => Resolution::of(PlacementKind::Floor),
            "1" => Resolution::of(PlacementKind::Wall),
            "2" => Resolution::of(PlacementKind::Chest),
            "3" => Resolution::of(PlacementKind::StairUp),
            "4" => Resolution::of(PlacementKind::StairDown),
            _ => match cell.strip_prefix(ENEMY_PREFIX) {
                Some(suffix) => Self::resolve_enemy(cell, suffix, position, registry),
                None => Resolution::unresolved(position, cell, UnresolvedReason::Unrecognized),
            },
        }
    }

    fn resolve_enemy<'r, O>(
        cell: &str,
        suffix: &str,
        position: Position,
        registry: &'r O,
    ) -> Resolution<'r>
    where
        O: EntityOracle + ?Sized,
    {
        let Some(id) = parse_enemy_id(suffix) else {
            return Resolution::unresolved(position, cell, UnresolvedReason::MalformedEnemy);
        };

        match registry.lookup(id) {
            Some(entity) => {
                tracing::trace!("cell {} resolved to enemy {} ({})", position, id, entity.name);
                Resolution {
                    kind: PlacementKind::Enemy,
                    entity: Some(entity),
                    diagnostic: None,
                }
            }
            None => Resolution::unresolved(position, cell, UnresolvedReason::MissingEntity(id)),
        }
    }
}

/// Parses the id after the enemy prefix: surrounding whitespace and one
/// leading `+` are allowed, the rest must be digits of a positive `u32`.
fn parse_enemy_id(suffix: &str) -> Option<EntityId> {
    let suffix = suffix.trim();
    let digits = suffix.strip_prefix('+').unwrap_or(suffix);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(EntityId(n)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::types::EntityStats;

    fn registry() -> HashMap<EntityId, EntityRecord> {
        let slime = EntityRecord::new(3, "Slime", EntityStats::new(10, 2, 1, 5), "SlimePrefab");
        HashMap::from([(slime.id, slime)])
    }

    #[test]
    fn static_symbols() {
        let registry = registry();
        let cases = [
            ("0", PlacementKind::Floor),
            ("1", PlacementKind::Wall),
            ("2", PlacementKind::Chest),
            ("3", PlacementKind::StairUp),
            ("4", PlacementKind::StairDown),
            ("", PlacementKind::Empty),
        ];
        for (cell, expected) in cases {
            let resolution = SymbolResolver::resolve(cell, 0, 0, &registry);
            assert_eq!(resolution.kind, expected, "cell {cell:?}");
            assert!(resolution.diagnostic.is_none());
            assert!(resolution.entity.is_none());
        }
    }

    #[test]
    fn enemy_hit_carries_record() {
        let registry = registry();
        let resolution = SymbolResolver::resolve("E3", 4, 2, &registry);
        assert_eq!(resolution.kind, PlacementKind::Enemy);
        let entity = resolution.entity.expect("enemy record");
        assert_eq!(entity.name, "Slime");
        assert_eq!(entity.presentation_key, "SlimePrefab");
        assert!(resolution.diagnostic.is_none());
    }

    #[test]
    fn enemy_miss_is_unknown_with_id_and_coordinate() {
        let registry: HashMap<EntityId, EntityRecord> = HashMap::new();
        let resolution = SymbolResolver::resolve("E3", 4, 2, &registry);
        assert_eq!(resolution.kind, PlacementKind::Unknown);
        assert_eq!(
            resolution.diagnostic,
            Some(Diagnostic::unresolved(
                Position::new(4, 2),
                "E3",
                UnresolvedReason::MissingEntity(EntityId(3)),
            ))
        );
        assert!(resolution.placement(Position::new(4, 2)).is_none());
    }

    #[test]
    fn bare_prefix_is_malformed_not_unrecognized() {
        let registry = registry();
        let malformed = SymbolResolver::resolve("E", 0, 0, &registry);
        let unknown = SymbolResolver::resolve("Q", 0, 0, &registry);

        assert_eq!(malformed.kind, PlacementKind::Unknown);
        assert_eq!(unknown.kind, PlacementKind::Unknown);
        assert_eq!(
            malformed.diagnostic.and_then(|d| d.unresolved_reason()),
            Some(UnresolvedReason::MalformedEnemy)
        );
        assert_eq!(
            unknown.diagnostic.and_then(|d| d.unresolved_reason()),
            Some(UnresolvedReason::Unrecognized)
        );
    }

    #[test]
    fn enemy_suffix_must_be_a_positive_integer() {
        let registry = registry();
        for cell in ["Ex", "E-3", "E0", "E+0", "E++3", "E3x", "E + 3", "E 3 4", "E99999999999"] {
            let resolution = SymbolResolver::resolve(cell, 0, 0, &registry);
            assert_eq!(
                resolution.diagnostic.and_then(|d| d.unresolved_reason()),
                Some(UnresolvedReason::MalformedEnemy),
                "cell {cell:?}"
            );
        }
    }

    #[test]
    fn enemy_suffix_allows_plus_sign_and_padding() {
        let registry = registry();
        for cell in ["E+3", "E 3", "E3 ", "E007"] {
            let resolution = SymbolResolver::resolve(cell, 0, 0, &registry);
            assert_eq!(resolution.kind, PlacementKind::Enemy, "cell {cell:?}");
            assert_eq!(resolution.entity.map(|e| e.id), Some(EntityId(3)), "cell {cell:?}");
            assert!(resolution.diagnostic.is_none(), "cell {cell:?}");
        }
    }

    #[test]
    fn symbols_are_case_sensitive() {
        let registry = registry();
        let resolution = SymbolResolver::resolve("e3", 0, 0, &registry);
        assert_eq!(
            resolution.diagnostic.and_then(|d| d.unresolved_reason()),
            Some(UnresolvedReason::Unrecognized)
        );
    }
}
