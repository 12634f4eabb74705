//! Room instantiation and the dungeon aggregate.
//!
//! The database picks templates and the boundary opens doors; neither calls
//! the other. This module holds the pieces an external generator composes
//! them with: materialize one room with its initial door set, then attach it
//! to the dungeon being assembled. How rooms relate spatially and which
//! doors pair up between neighbors is the layout generator's business, not
//! modeled here.

use crate::boundary::{BoundaryError, RoomBoundary, WallLocation};
use crate::spec::{RoomSpecification, TemplateLocator};

/// Discrete grid position a room is placed at, in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Everything needed to materialize one room: the chosen template, where the
/// room goes, and the doors the layout requires.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSpawnInfo {
    /// Theme and footprint of the chosen template.
    pub specification: RoomSpecification,

    /// Storage reference of the template variant to materialize.
    pub locator: TemplateLocator,

    /// Grid placement of the room.
    pub position: Position,

    /// Doors to open before the room is handed to the generator.
    pub door_locations: Vec<WallLocation>,
}

/// A room materialized into the dungeon: its template specification, grid
/// placement, and the boundary the generator mutates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedRoom {
    specification: RoomSpecification,
    locator: TemplateLocator,
    position: Position,
    boundary: RoomBoundary,
}

impl PlacedRoom {
    /// Materializes a room from its spawn info.
    ///
    /// Builds the boundary from the specification's footprint (all segments
    /// solid) and opens every requested door before returning; a room is not
    /// ready for the generator until its whole initial door set is open.
    ///
    /// # Errors
    ///
    /// Propagates [`BoundaryError`] from [`RoomBoundary::add_door`]: an
    /// invalid or duplicated door location in the batch means the layout
    /// handing out the spawn info is inconsistent.
    pub fn spawn(info: RoomSpawnInfo) -> Result<Self, BoundaryError> {
        let RoomSpawnInfo {
            specification,
            locator,
            position,
            door_locations,
        } = info;

        let mut boundary = RoomBoundary::new(specification.width, specification.length);
        for location in door_locations {
            boundary.add_door(location)?;
        }

        Ok(Self {
            specification,
            locator,
            position,
            boundary,
        })
    }

    /// Theme and footprint this room was built from.
    pub fn specification(&self) -> RoomSpecification {
        self.specification
    }

    /// Storage reference of the template variant this room was built from.
    pub fn locator(&self) -> &TemplateLocator {
        &self.locator
    }

    /// Grid placement of the room.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The room's perimeter.
    pub fn boundary(&self) -> &RoomBoundary {
        &self.boundary
    }

    /// Mutable perimeter access for the generator that owns this room.
    pub fn boundary_mut(&mut self) -> &mut RoomBoundary {
        &mut self.boundary
    }
}

/// Owning collection of the rooms assembled so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dungeon {
    rooms: Vec<PlacedRoom>,
}

impl Dungeon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a room to the dungeon.
    pub fn add_room(&mut self, room: PlacedRoom) {
        self.rooms.push(room);
    }

    /// Rooms in attachment order.
    pub fn rooms(&self) -> &[PlacedRoom] {
        &self.rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Direction;
    use crate::spec::Theme;

    fn spawn_info(door_locations: Vec<WallLocation>) -> RoomSpawnInfo {
        RoomSpawnInfo {
            specification: RoomSpecification::new(Theme::Crypt, 4, 3),
            locator: TemplateLocator::new("rooms/crypt/crypt_4x3_a"),
            position: Position::new(10, -2),
            door_locations,
        }
    }

    #[test]
    fn spawn_applies_the_whole_door_batch() {
        let doors = vec![
            WallLocation::new(Direction::North, 0),
            WallLocation::new(Direction::South, 2),
            WallLocation::new(Direction::East, 1),
            WallLocation::new(Direction::West, 0),
        ];

        let room = PlacedRoom::spawn(spawn_info(doors.clone())).unwrap();

        assert_eq!(room.position(), Position::new(10, -2));
        assert_eq!(room.specification().theme, Theme::Crypt);
        assert_eq!(room.locator().as_str(), "rooms/crypt/crypt_4x3_a");
        for door in &doors {
            assert_eq!(room.boundary().has_door_at_location(*door), Ok(true));
        }
        assert_eq!(room.boundary().door_locations().count(), doors.len());
    }

    #[test]
    fn duplicate_door_in_batch_fails_spawn() {
        let spot = WallLocation::new(Direction::North, 1);

        let error = PlacedRoom::spawn(spawn_info(vec![spot, spot])).unwrap_err();
        assert_eq!(error, BoundaryError::DoorAlreadyPresent { location: spot });
    }

    #[test]
    fn door_outside_the_footprint_fails_spawn() {
        // East wall of a 4x3 room has segments 0..=2.
        let spot = WallLocation::new(Direction::East, 3);

        let error = PlacedRoom::spawn(spawn_info(vec![spot])).unwrap_err();
        assert_eq!(error, BoundaryError::InvalidLocation { location: spot });
    }

    #[test]
    fn dungeon_collects_rooms_in_attachment_order() {
        let mut dungeon = Dungeon::new();
        assert!(dungeon.rooms().is_empty());

        dungeon.add_room(PlacedRoom::spawn(spawn_info(Vec::new())).unwrap());
        dungeon.add_room(
            PlacedRoom::spawn(spawn_info(vec![WallLocation::new(Direction::North, 0)])).unwrap(),
        );

        assert_eq!(dungeon.rooms().len(), 2);
        assert_eq!(dungeon.rooms()[0].boundary().door_locations().count(), 0);
        assert_eq!(dungeon.rooms()[1].boundary().door_locations().count(), 1);
    }

    #[test]
    fn generator_can_keep_mutating_a_placed_room() {
        let mut room = PlacedRoom::spawn(spawn_info(Vec::new())).unwrap();
        let spot = WallLocation::new(Direction::South, 1);

        room.boundary_mut().add_door(spot).unwrap();
        assert_eq!(room.boundary().has_door_at_location(spot), Ok(true));

        room.boundary_mut().remove_door(spot).unwrap();
        assert_eq!(room.boundary().has_door_at_location(spot), Ok(false));
    }
}
