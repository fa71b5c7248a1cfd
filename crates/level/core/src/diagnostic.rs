//! Soft failures collected while loading tables and grids and while planning.
//!
//! Diagnostics never abort a load or a planning pass. They are attached to
//! the result that produced them and mirrored to `tracing` via
//! [`Diagnostic::report`].

use crate::error::{ErrorSeverity, LevelError};
use crate::types::{EntityId, Position};

/// Keyed collection a duplicate was detected in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum KeyScope {
    Entity,
    Grid,
}

/// Why a table row was dropped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RowError {
    #[error("expected at least {expected} columns, found {found}")]
    TooFewColumns { expected: usize, found: usize },

    #[error("column '{column}' is not an integer: '{value}'")]
    InvalidNumber { column: &'static str, value: String },
}

/// Why a grid cell produced no placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnresolvedReason {
    /// The text matches no known symbol.
    #[error("unrecognized symbol")]
    Unrecognized,

    /// The text starts with `E` but the suffix is not a positive integer.
    #[error("malformed enemy symbol")]
    MalformedEnemy,

    /// The enemy id parsed but the registry holds no such record.
    #[error("enemy {0} not found in registry")]
    MissingEntity(EntityId),
}

/// A recoverable problem found in authored level data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Diagnostic {
    #[error("resource '{resource}' not found")]
    ResourceNotFound { resource: String },

    #[error("resource '{resource}' could not be read: {message}")]
    ResourceUnreadable { resource: String, message: String },

    /// `line` is 1-based and counts the header.
    #[error("{table}:{line}: row skipped: {reason}")]
    RowSkipped {
        table: String,
        line: usize,
        reason: RowError,
    },

    #[error("duplicate {scope} key '{key}' rejected")]
    DuplicateKey { scope: KeyScope, key: String },

    #[error("cell {position} '{raw}': {reason}")]
    SymbolUnresolved {
        position: Position,
        raw: String,
        reason: UnresolvedReason,
    },
}

impl Diagnostic {
    pub fn unresolved(position: Position, raw: impl Into<String>, reason: UnresolvedReason) -> Self {
        Self::SymbolUnresolved {
            position,
            raw: raw.into(),
            reason,
        }
    }

    /// Reason for an unresolved cell, if this is one.
    pub fn unresolved_reason(&self) -> Option<UnresolvedReason> {
        match self {
            Self::SymbolUnresolved { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Logs the diagnostic at a level matching its kind.
    pub fn report(&self) {
        match self {
            Self::ResourceNotFound { .. } | Self::ResourceUnreadable { .. } => {
                tracing::error!(code = self.error_code(), "{}", self)
            }
            _ => tracing::warn!(code = self.error_code(), "{}", self),
        }
    }
}

impl LevelError for Diagnostic {
    fn severity(&self) -> ErrorSeverity {
        use Diagnostic::*;
        match self {
            ResourceNotFound { .. } | ResourceUnreadable { .. } | RowSkipped { .. } => {
                ErrorSeverity::Recoverable
            }
            DuplicateKey { .. } | SymbolUnresolved { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use Diagnostic::*;
        match self {
            ResourceNotFound { .. } => "RESOURCE_NOT_FOUND",
            ResourceUnreadable { .. } => "RESOURCE_UNREADABLE",
            RowSkipped { .. } => "ROW_SKIPPED",
            DuplicateKey { .. } => "DUPLICATE_KEY",
            SymbolUnresolved {
                reason: UnresolvedReason::Unrecognized,
                ..
            } => "SYMBOL_UNRECOGNIZED",
            SymbolUnresolved {
                reason: UnresolvedReason::MalformedEnemy,
                ..
            } => "SYMBOL_MALFORMED_ENEMY",
            SymbolUnresolved {
                reason: UnresolvedReason::MissingEntity(_),
                ..
            } => "SYMBOL_MISSING_ENTITY",
        }
    }
}
