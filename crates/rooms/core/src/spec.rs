//! Room template specifications and catalog records.
//!
//! A specification is the lookup key generation works with: a theme plus a
//! footprint. The catalog collaborator discovers pre-authored templates and
//! reports them as [`RoomTemplateRecord`]s; the database indexes those
//! records by specification.

use std::fmt;

/// Categorical tag grouping room templates for thematically consistent
/// generation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Theme {
    /// Burial chambers and ossuaries.
    #[default]
    Crypt,
    /// Open pillared halls.
    Hall,
    /// Natural cave chambers.
    Cavern,
    /// Shelf-lined archives.
    Library,
    /// Smithies and workrooms.
    Forge,
    /// Flooded drainage chambers.
    Sewer,
}

impl Theme {
    /// All themes, for probing per-theme queries.
    pub const ALL: [Theme; 6] = [
        Theme::Crypt,
        Theme::Hall,
        Theme::Cavern,
        Theme::Library,
        Theme::Forge,
        Theme::Sewer,
    ];
}

/// Lookup key for room templates: theme plus footprint in tile units.
///
/// Pure value type: two specifications are equal iff all three fields are
/// equal, and equal specifications are interchangeable as map keys. A
/// zero-dimension value is representable - whether one ever shows up is a
/// catalog data-quality concern, not this type's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSpecification {
    /// Theme the template belongs to.
    pub theme: Theme,

    /// Footprint width in tiles (north/south wall segment count).
    pub width: u32,

    /// Footprint length in tiles (east/west wall segment count).
    pub length: u32,
}

impl RoomSpecification {
    pub const fn new(theme: Theme, width: u32, length: u32) -> Self {
        Self {
            theme,
            width,
            length,
        }
    }
}

impl fmt::Display for RoomSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.theme, self.width, self.length)
    }
}

/// Opaque reference to a template's backing storage.
///
/// The core never interprets the contents; it hands the locator to the
/// instantiation collaborator exactly as the catalog supplied it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TemplateLocator(String);

impl TemplateLocator {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateLocator {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

impl From<String> for TemplateLocator {
    fn from(locator: String) -> Self {
        Self(locator)
    }
}

/// One discovered room template: its specification plus where the template's
/// content lives.
///
/// Produced by the catalog collaborator and consumed once at database build
/// time. Several records may share a specification (template variants with
/// the same theme and footprint).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomTemplateRecord {
    /// The template's theme and footprint.
    pub specification: RoomSpecification,

    /// Opaque storage reference resolved by the instantiation collaborator.
    pub locator: TemplateLocator,
}

impl RoomTemplateRecord {
    pub fn new(specification: RoomSpecification, locator: impl Into<TemplateLocator>) -> Self {
        Self {
            specification,
            locator: locator.into(),
        }
    }
}
