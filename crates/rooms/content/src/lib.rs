//! Room catalog content and loaders.
//!
//! This crate plays the catalog collaborator: it materializes the template
//! records the specification database is built from, plus the scenario
//! placements the demo client spawns. All data files are RON.
//!
//! Loaders use rooms-core types directly with serde for deserialization;
//! storage locators are passed through opaquely and never interpreted here.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ContentFactory, RoomCatalog, RoomPlacement, ScenarioLoader};
