//! Content factory for locating data files.

use std::path::{Path, PathBuf};

use rooms_core::RoomTemplateRecord;

use crate::loaders::{CatalogLoader, LoadResult, RoomPlacement, ScenarioLoader};

/// Content factory that loads catalog data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── catalog.ron
/// └── scenarios/
///     └── crypt_and_hall.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the template catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Vec<RoomTemplateRecord>> {
        let path = self.data_dir.join("catalog.ron");
        CatalogLoader::load(&path)
    }

    /// Load room placements from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Vec<RoomPlacement>> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
