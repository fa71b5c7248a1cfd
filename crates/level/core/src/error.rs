//! Common error infrastructure for level-core.
//!
//! Every soft failure in the pipeline (a missing resource, a skipped row, an
//! unresolved symbol) is a [`crate::Diagnostic`]; the single hard failure is
//! [`crate::PlanError`]. Both implement [`LevelError`] so callers can classify
//! them uniformly.

/// Severity level of an error, used for categorization and reporting.
///
/// - **Recoverable**: the pipeline continues with less data (row dropped, table absent)
/// - **Validation**: authored content is wrong and should be fixed by a designer
/// - **Fatal**: the requested operation cannot produce a result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - loading continues without the affected item.
    ///
    /// Examples: table resource missing, row with too few columns
    Recoverable,

    /// Validation error - authored data references something invalid.
    ///
    /// Examples: unknown symbol, enemy id missing from the registry
    Validation,

    /// Fatal error - the call cannot produce a result.
    ///
    /// Examples: planning a grid that was never loaded
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if processing continues after an error of this severity.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Fatal)
    }
}

/// Common trait for all level-core errors and diagnostics.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on whether the pipeline can continue
/// - Keep `error_code` stable; tests and tooling match on it
pub trait LevelError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
