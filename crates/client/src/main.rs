//! Room assembly client binary.
//!
//! Composition root wiring the specification database to room boundaries.
//! The database picks templates and the boundary opens doors; this binary is
//! the external generator composing the two:
//!
//! 1. Load the template catalog and build the specification database
//! 2. Load a scenario describing room placements and door locations
//! 3. Validate each placement against the database, resolve a template
//!    variant, and spawn the room with its doors
//! 4. Attach the rooms to a dungeon and report what was assembled

mod config;

use anyhow::{Context, Result};
use rooms_content::ContentFactory;
use rooms_core::{Dungeon, PlacedRoom, RoomSpawnInfo, RoomSpecificationDatabase, Theme};

use config::ClientConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Starting room assembly client");
    tracing::info!("Data directory: {}", config.data_dir.display());
    tracing::info!("Scenario: {}", config.scenario);

    let factory = ContentFactory::new(&config.data_dir);

    // 1. Build the specification database from the discovered catalog.
    let records = factory.load_catalog().context("loading template catalog")?;
    tracing::info!("Catalog supplied {} template records", records.len());

    let database =
        RoomSpecificationDatabase::build(records).context("building specification database")?;
    tracing::info!(
        "Database indexes {} specifications across {} templates",
        database.specification_count(),
        database.template_count()
    );

    for theme in Theme::ALL {
        match (database.max_width(theme), database.max_length(theme)) {
            (Ok(width), Ok(length)) => {
                tracing::info!(
                    "Largest {} templates: {} wide, {} long",
                    theme,
                    width,
                    length
                );
            }
            _ => tracing::debug!("No {} templates in catalog", theme),
        }
    }

    // 2. Spawn the scenario's rooms and assemble the dungeon.
    let placements = factory
        .load_scenario(&config.scenario)
        .context("loading scenario")?;
    tracing::info!("Scenario requests {} rooms", placements.len());

    let mut dungeon = Dungeon::new();
    for placement in placements {
        let specification = placement.specification;

        if !database
            .exists(&specification)
            .context("validating placement specification")?
        {
            anyhow::bail!("scenario requests {specification}, but no such template exists");
        }

        let variants = database
            .locators_for(&specification)
            .context("resolving template variants")?;
        // Take the first discovered variant.
        let locator = variants[0].clone();
        tracing::debug!(
            "Resolved {} -> {} ({} variant(s))",
            specification,
            locator,
            variants.len()
        );

        let room = PlacedRoom::spawn(RoomSpawnInfo {
            specification,
            locator,
            position: placement.position,
            door_locations: placement.door_locations,
        })
        .with_context(|| format!("spawning {specification} room"))?;

        tracing::info!(
            "Placed {} room at ({}, {}) with {} door(s)",
            room.specification(),
            room.position().x,
            room.position().y,
            room.boundary().door_locations().count()
        );

        dungeon.add_room(room);
    }

    tracing::info!("Dungeon assembled: {} rooms", dungeon.rooms().len());
    Ok(())
}
