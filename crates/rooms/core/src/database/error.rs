//! Specification database errors.

use crate::error::{ErrorSeverity, RoomError};
use crate::spec::{RoomSpecification, Theme};

/// Errors raised when building or querying the specification database.
///
/// Query errors are caller-contract violations: the caller could have
/// checked [`exists`](super::RoomSpecificationDatabase::exists) first. The
/// database never answers them with a default.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DatabaseError {
    /// Zero template records were supplied at build time.
    #[error("template catalog is empty")]
    EmptyCatalog,

    /// A query used a non-positive footprint.
    #[error("queried with invalid specification {specification}")]
    InvalidSpecification {
        /// The rejected specification.
        specification: RoomSpecification,
    },

    /// No template matches the queried specification.
    #[error("no template with specification {specification}")]
    SpecificationNotFound {
        /// The absent specification.
        specification: RoomSpecification,
    },

    /// The theme has no recorded templates.
    #[error("theme {theme} has no recorded templates")]
    ThemeNotFound {
        /// The absent theme.
        theme: Theme,
    },
}

impl RoomError for DatabaseError {
    fn severity(&self) -> ErrorSeverity {
        use DatabaseError::*;
        match self {
            // A database with no templates cannot serve generation at all.
            EmptyCatalog => ErrorSeverity::Fatal,

            InvalidSpecification { .. } | SpecificationNotFound { .. } | ThemeNotFound { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use DatabaseError::*;
        match self {
            EmptyCatalog => "DATABASE_EMPTY_CATALOG",
            InvalidSpecification { .. } => "DATABASE_INVALID_SPECIFICATION",
            SpecificationNotFound { .. } => "DATABASE_SPECIFICATION_NOT_FOUND",
            ThemeNotFound { .. } => "DATABASE_THEME_NOT_FOUND",
        }
    }
}
