//! Segmented wall primitive.
//!
//! A wall is an ordered run of segments whose count is fixed at construction.
//! Each segment holds exactly one state, and replacing a state here is
//! unconditional: door legality (no double add, no removing what is not
//! there) is enforced one level up by [`RoomBoundary`](super::RoomBoundary),
//! which knows door semantics.

use crate::error::{ErrorSeverity, RoomError};

/// State of a single wall segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentState {
    /// Impassable wall segment.
    #[default]
    Solid,

    /// Open doorway connecting to a neighboring room.
    Door,
}

impl SegmentState {
    /// Returns true if this segment holds a door.
    #[inline]
    pub const fn is_door(self) -> bool {
        matches!(self, Self::Door)
    }
}

/// Ordered, fixed-length run of segment states for one side of a room.
///
/// The segment count is the wall's tile count and never changes after
/// construction; index `i` addresses a segment iff `i < len`. Purely
/// in-memory state, no I/O.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentedWall {
    segments: Vec<SegmentState>,
}

impl SegmentedWall {
    /// Creates a wall of `tile_count` solid segments.
    pub fn new(tile_count: u32) -> Self {
        Self {
            segments: vec![SegmentState::Solid; tile_count as usize],
        }
    }

    /// Number of segments in this wall.
    pub fn len(&self) -> u32 {
        self.segments.len() as u32
    }

    /// Returns true if this wall has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if there is a segment corresponding to the given index.
    pub fn is_valid_index(&self, index: u32) -> bool {
        (index as usize) < self.segments.len()
    }

    /// Returns the state of the segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::OutOfRange`] if the index is invalid.
    pub fn segment_state(&self, index: u32) -> Result<SegmentState, WallError> {
        self.segments
            .get(index as usize)
            .copied()
            .ok_or(WallError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Replaces the state of the segment at `index` unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::OutOfRange`] if the index is invalid.
    pub fn set_segment_state(&mut self, index: u32, state: SegmentState) -> Result<(), WallError> {
        let len = self.len();
        match self.segments.get_mut(index as usize) {
            Some(slot) => {
                *slot = state;
                Ok(())
            }
            None => Err(WallError::OutOfRange { index, len }),
        }
    }
}

/// Errors raised by segment-level access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallError {
    /// Segment index outside `[0, len)`.
    #[error("segment index {index} is out of range (wall has {len} segments)")]
    OutOfRange {
        /// The rejected index.
        index: u32,
        /// The wall's segment count.
        len: u32,
    },
}

impl RoomError for WallError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            WallError::OutOfRange { .. } => "WALL_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_wall_is_all_solid() {
        let wall = SegmentedWall::new(4);
        assert_eq!(wall.len(), 4);
        for index in 0..4 {
            assert_eq!(wall.segment_state(index), Ok(SegmentState::Solid));
        }
    }

    #[test]
    fn index_validity_tracks_length() {
        let wall = SegmentedWall::new(3);
        assert!(wall.is_valid_index(0));
        assert!(wall.is_valid_index(2));
        assert!(!wall.is_valid_index(3));
    }

    #[test]
    fn set_segment_state_replaces_unconditionally() {
        let mut wall = SegmentedWall::new(2);
        wall.set_segment_state(1, SegmentState::Door).unwrap();
        assert_eq!(wall.segment_state(1), Ok(SegmentState::Door));

        // No door legality at this layer: re-setting the same state is fine.
        wall.set_segment_state(1, SegmentState::Door).unwrap();
        assert_eq!(wall.segment_state(1), Ok(SegmentState::Door));
    }

    #[test]
    fn out_of_range_access_is_rejected() {
        let mut wall = SegmentedWall::new(2);
        assert_eq!(
            wall.segment_state(2),
            Err(WallError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            wall.set_segment_state(9, SegmentState::Door),
            Err(WallError::OutOfRange { index: 9, len: 2 })
        );
    }

    #[test]
    fn zero_length_wall_has_no_valid_indices() {
        let wall = SegmentedWall::new(0);
        assert!(wall.is_empty());
        assert!(!wall.is_valid_index(0));
    }

    #[test]
    fn out_of_range_is_a_validation_error() {
        use crate::error::{ErrorSeverity, RoomError};

        let error = WallError::OutOfRange { index: 5, len: 2 };
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.error_code(), "WALL_OUT_OF_RANGE");
    }
}
