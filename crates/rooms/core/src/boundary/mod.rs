//! Room boundary model: four segmented walls addressed by direction.
//!
//! A dungeon is assembled by connecting rooms, and rooms connect by opening
//! doors through their perimeter. The boundary lets a generator address that
//! perimeter at segment granularity: pick a wall, pick an index, toggle the
//! segment between solid and door. Which mesh is shown for either state is a
//! rendering concern layered on top of the state transition, not part of
//! this model.

mod error;
mod wall;

use core::fmt;

pub use error::BoundaryError;
pub use wall::{SegmentState, SegmentedWall, WallError};

/// Cardinal side of a room. Identity only; no ordering semantics.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, for iterating a boundary's walls.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}

/// Identifies one wall segment of a room.
///
/// A location is not inherently valid; validity is relative to a specific
/// boundary's footprint (see [`RoomBoundary::is_valid_location`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallLocation {
    /// The wall holding the segment.
    pub direction: Direction,

    /// Index within that wall, counting from 0.
    pub segment_index: u32,
}

impl WallLocation {
    pub const fn new(direction: Direction, segment_index: u32) -> Self {
        Self {
            direction,
            segment_index,
        }
    }
}

impl fmt::Display for WallLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.direction, self.segment_index)
    }
}

/// Perimeter of one room: four walls obeying the footprint invariant.
///
/// North and south walls have `width` segments; east and west walls have
/// `length` segments. Every segment starts solid - a freshly built room has
/// no doors until a generator places them. The boundary exclusively owns its
/// walls; they have no identity outside it.
///
/// Mutation is meant to happen from a single layout-generation pass. Sharing
/// one boundary across generation workers is the caller's bug to prevent;
/// the type itself defines no locking.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomBoundary {
    width: u32,
    length: u32,
    walls: [SegmentedWall; 4],
}

impl RoomBoundary {
    /// Builds a boundary for a `width` x `length` footprint, all segments
    /// solid.
    pub fn new(width: u32, length: u32) -> Self {
        Self {
            width,
            length,
            // Indexed by `wall_index`: North, South, East, West.
            walls: [
                SegmentedWall::new(width),
                SegmentedWall::new(width),
                SegmentedWall::new(length),
                SegmentedWall::new(length),
            ],
        }
    }

    /// Footprint width in tiles (segment count of the north/south walls).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Footprint length in tiles (segment count of the east/west walls).
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the wall on the given side.
    pub fn wall(&self, direction: Direction) -> &SegmentedWall {
        &self.walls[Self::wall_index(direction)]
    }

    fn wall_mut(&mut self, direction: Direction) -> &mut SegmentedWall {
        &mut self.walls[Self::wall_index(direction)]
    }

    const fn wall_index(direction: Direction) -> usize {
        match direction {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    /// Returns true if the location names an existing segment of this room.
    ///
    /// The one query meant to be called with unchecked input: it reports
    /// false instead of failing, and every other operation relies on it as
    /// the gatekeeper.
    pub fn is_valid_location(&self, location: WallLocation) -> bool {
        self.wall(location.direction)
            .is_valid_index(location.segment_index)
    }

    /// Returns true if the room has a door at the given location.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::InvalidLocation`] if the location does not
    /// exist on this room.
    pub fn has_door_at_location(&self, location: WallLocation) -> Result<bool, BoundaryError> {
        let state = self
            .wall(location.direction)
            .segment_state(location.segment_index)
            .map_err(|_| BoundaryError::InvalidLocation { location })?;

        Ok(state.is_door())
    }

    /// Opens a door at the given location.
    ///
    /// Adding a door where one is already open is an error rather than a
    /// no-op: a generator issuing a double add holds an inconsistent model
    /// of the layout it is building, and surfacing that immediately prevents
    /// silently divergent topology.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::InvalidLocation`] if the location does not
    /// exist, or [`BoundaryError::DoorAlreadyPresent`] if the segment is
    /// already a door.
    pub fn add_door(&mut self, location: WallLocation) -> Result<(), BoundaryError> {
        if self.has_door_at_location(location)? {
            return Err(BoundaryError::DoorAlreadyPresent { location });
        }

        self.set_segment(location, SegmentState::Door)
    }

    /// Closes the door at the given location, restoring a solid wall.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::InvalidLocation`] if the location does not
    /// exist, or [`BoundaryError::NoDoorPresent`] if the segment is solid.
    pub fn remove_door(&mut self, location: WallLocation) -> Result<(), BoundaryError> {
        if !self.has_door_at_location(location)? {
            return Err(BoundaryError::NoDoorPresent { location });
        }

        self.set_segment(location, SegmentState::Solid)
    }

    /// Iterates every location currently holding a door, wall by wall.
    pub fn door_locations(&self) -> impl Iterator<Item = WallLocation> + '_ {
        Direction::ALL.into_iter().flat_map(move |direction| {
            let wall = self.wall(direction);
            (0..wall.len()).filter_map(move |index| {
                wall.segment_state(index)
                    .ok()
                    .filter(|state| state.is_door())
                    .map(|_| WallLocation::new(direction, index))
            })
        })
    }

    fn set_segment(
        &mut self,
        location: WallLocation,
        state: SegmentState,
    ) -> Result<(), BoundaryError> {
        self.wall_mut(location.direction)
            .set_segment_state(location.segment_index, state)
            .map_err(|_| BoundaryError::InvalidLocation { location })
    }
}
