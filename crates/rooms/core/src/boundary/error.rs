//! Boundary-level door legality errors.

use crate::error::{ErrorSeverity, RoomError};

use super::WallLocation;

/// Errors raised by room boundary operations.
///
/// Each variant is a precondition violation the caller could have detected
/// through [`is_valid_location`](super::RoomBoundary::is_valid_location) or
/// [`has_door_at_location`](super::RoomBoundary::has_door_at_location); the
/// boundary never coerces an illegal door operation into a no-op.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryError {
    /// The location's segment index is invalid for that wall's length.
    #[error("wall location {location} does not exist on this room")]
    InvalidLocation {
        /// The rejected location.
        location: WallLocation,
    },

    /// Attempted to add a door where one is already open.
    #[error("a door is already present at {location}")]
    DoorAlreadyPresent {
        /// The location that already holds a door.
        location: WallLocation,
    },

    /// Attempted to remove a door from a solid segment.
    #[error("no door is present at {location}")]
    NoDoorPresent {
        /// The solid location.
        location: WallLocation,
    },
}

impl RoomError for BoundaryError {
    fn severity(&self) -> ErrorSeverity {
        // Every boundary error is a caller-contract violation.
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use BoundaryError::*;
        match self {
            InvalidLocation { .. } => "BOUNDARY_INVALID_LOCATION",
            DoorAlreadyPresent { .. } => "BOUNDARY_DOOR_ALREADY_PRESENT",
            NoDoorPresent { .. } => "BOUNDARY_NO_DOOR_PRESENT",
        }
    }
}
