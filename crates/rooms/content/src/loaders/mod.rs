//! Content loaders for reading catalog data from files.
//!
//! This module provides loaders that convert RON files into rooms-core
//! records: the template catalog the database indexes, and the scenario
//! placements the client spawns.

pub mod catalog;
pub mod factory;
pub mod scenario;

pub use catalog::{CatalogLoader, RoomCatalog};
pub use factory::ContentFactory;
pub use scenario::{RoomPlacement, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
