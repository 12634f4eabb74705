//! Room template catalog loader.

use std::path::Path;

use rooms_core::RoomTemplateRecord;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
///
/// Each entry pairs a template specification with the opaque locator of the
/// template's backing storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCatalog {
    pub rooms: Vec<RoomTemplateRecord>,
}

/// Loader for room template catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a template catalog from a RON file.
    ///
    /// Returns the discovered records in file order; that order becomes the
    /// database's per-specification locator order.
    pub fn load(path: &Path) -> LoadResult<Vec<RoomTemplateRecord>> {
        let content = read_file(path)?;
        let catalog: RoomCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse room catalog RON: {}", e))?;

        Ok(catalog.rooms)
    }
}
