//! Common error infrastructure for rooms-core.
//!
//! Domain-specific errors (`WallError`, `BoundaryError`, `DatabaseError`) are
//! defined in their respective modules alongside the operations they guard;
//! this module provides the classification they all share.
//!
//! Every error in this crate is a caller-contract violation that was
//! detectable beforehand through a query (`is_valid_location`,
//! `has_door_at_location`, `exists`). Nothing is recovered from internally
//! and nothing is coerced to a default: silently absorbing an illegal door
//! operation would corrupt the layout invariants a generator depends on.

/// Severity level of an error, used for categorization and logging priorities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: out-of-range segment index, double door add
    Validation,

    /// Fatal error - the component cannot serve its purpose.
    ///
    /// Examples: a specification database built from an empty catalog
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error leaves the component unusable.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all rooms-core errors.
///
/// Provides a uniform interface for error classification across the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Carry the offending location/specification in the variant fields
/// - Classify severity by whether the component can keep serving, not impact
pub trait RoomError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
