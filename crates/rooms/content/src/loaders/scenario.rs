//! Scenario loader.
//!
//! Scenarios describe room placements for the client: which template
//! specification to use, where the room sits, and which doors to open.
//! A placement names a specification, not a concrete template variant -
//! resolving a locator is done against the database afterwards.

use std::path::Path;

use rooms_core::{Direction, Position, RoomSpecification, Theme, WallLocation};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Scenario structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioRon {
    rooms: Vec<RoomPlacementRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RoomPlacementRon {
    theme: Theme,
    footprint: (u32, u32),        // (width, length)
    position: (i32, i32),         // (x, y)
    doors: Vec<(Direction, u32)>, // (wall, segment index)
}

/// One requested room placement, before a concrete template variant is
/// chosen from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPlacement {
    /// Required theme and footprint.
    pub specification: RoomSpecification,

    /// Grid placement of the room.
    pub position: Position,

    /// Doors the layout requires on this room.
    pub door_locations: Vec<WallLocation>,
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load room placements from a RON scenario file.
    pub fn load(path: &Path) -> LoadResult<Vec<RoomPlacement>> {
        let content = read_file(path)?;
        let data: ScenarioRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let placements = data
            .rooms
            .into_iter()
            .map(|room| RoomPlacement {
                specification: RoomSpecification::new(
                    room.theme,
                    room.footprint.0,
                    room.footprint.1,
                ),
                position: Position::new(room.position.0, room.position.1),
                door_locations: room
                    .doors
                    .into_iter()
                    .map(|(direction, segment_index)| WallLocation::new(direction, segment_index))
                    .collect(),
            })
            .collect();

        Ok(placements)
    }
}
