//! Dungeon room primitives shared across generation tools.
//!
//! `rooms-core` defines the two stateful pieces a layout generator composes:
//! the segmented-wall door model ([`boundary::RoomBoundary`]) and the room
//! template index ([`database::RoomSpecificationDatabase`]). The two never
//! call each other; an external generator queries the database to pick a
//! template, then opens doors on the boundary it instantiated from it.
//! Supporting crates depend on the types re-exported here.
pub mod boundary;
pub mod database;
pub mod dungeon;
pub mod error;
pub mod spec;

pub use boundary::{
    BoundaryError, Direction, RoomBoundary, SegmentState, SegmentedWall, WallError, WallLocation,
};
pub use database::{DatabaseError, RoomSpecificationDatabase};
pub use dungeon::{Dungeon, PlacedRoom, Position, RoomSpawnInfo};
pub use error::{ErrorSeverity, RoomError};
pub use spec::{RoomSpecification, RoomTemplateRecord, TemplateLocator, Theme};
