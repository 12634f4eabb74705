//! Room specification database.
//!
//! Built once at startup from the catalog collaborator's discovered template
//! records, then queried by layout generators: "does a template with these
//! specs exist?", "what is the largest room of this theme?". Indexing at
//! build time makes every query a map lookup instead of a catalog scan.

mod error;

use std::collections::HashMap;

pub use error::DatabaseError;

use crate::spec::{RoomSpecification, RoomTemplateRecord, TemplateLocator, Theme};

/// Index over a catalog of room templates.
///
/// Read-only after construction, so one instance can be shared freely across
/// concurrent generator instances; rebuilding means constructing a new
/// instance from a fresh catalog scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomSpecificationDatabase {
    /// Locators keyed by specification, in catalog discovery order.
    templates_by_spec: HashMap<RoomSpecification, Vec<TemplateLocator>>,

    /// Maximum template width per theme.
    max_width_by_theme: HashMap<Theme, u32>,

    /// Maximum template length per theme, tracked independently of width:
    /// the widest room of a theme need not be the longest.
    max_length_by_theme: HashMap<Theme, u32>,
}

impl RoomSpecificationDatabase {
    /// Builds the database from the catalog collaborator's records.
    ///
    /// Locators accumulate under their specification in arrival order; the
    /// order is the catalog's discovery order and carries no other meaning.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::EmptyCatalog`] if `records` is empty - a
    /// database with no usable templates cannot serve generation.
    pub fn build(records: Vec<RoomTemplateRecord>) -> Result<Self, DatabaseError> {
        if records.is_empty() {
            return Err(DatabaseError::EmptyCatalog);
        }

        let mut database = Self {
            templates_by_spec: HashMap::new(),
            max_width_by_theme: HashMap::new(),
            max_length_by_theme: HashMap::new(),
        };

        for record in records {
            database.add_record(record);
        }

        Ok(database)
    }

    fn add_record(&mut self, record: RoomTemplateRecord) {
        let RoomTemplateRecord {
            specification,
            locator,
        } = record;

        self.templates_by_spec
            .entry(specification)
            .or_default()
            .push(locator);

        let max_width = self
            .max_width_by_theme
            .entry(specification.theme)
            .or_insert(specification.width);
        *max_width = (*max_width).max(specification.width);

        let max_length = self
            .max_length_by_theme
            .entry(specification.theme)
            .or_insert(specification.length);
        *max_length = (*max_length).max(specification.length);
    }

    /// Returns true if at least one template matches the given
    /// specification.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::InvalidSpecification`] if the queried
    /// footprint has a zero dimension - that is a caller error, not "no
    /// templates found".
    pub fn exists(&self, specification: &RoomSpecification) -> Result<bool, DatabaseError> {
        if specification.width == 0 || specification.length == 0 {
            return Err(DatabaseError::InvalidSpecification {
                specification: *specification,
            });
        }

        Ok(self.templates_by_spec.contains_key(specification))
    }

    /// Returns the locators of every template with the given specification,
    /// in catalog discovery order.
    ///
    /// Callers are expected to have checked [`exists`](Self::exists) first.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::SpecificationNotFound`] if no template has
    /// the specification. A present key always holds at least one locator,
    /// so absence is a precondition violation rather than an empty result.
    pub fn locators_for(
        &self,
        specification: &RoomSpecification,
    ) -> Result<&[TemplateLocator], DatabaseError> {
        self.templates_by_spec
            .get(specification)
            .map(Vec::as_slice)
            .ok_or(DatabaseError::SpecificationNotFound {
                specification: *specification,
            })
    }

    /// Returns the maximum width over all templates of the given theme.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::ThemeNotFound`] if the theme has no recorded
    /// templates.
    pub fn max_width(&self, theme: Theme) -> Result<u32, DatabaseError> {
        self.max_width_by_theme
            .get(&theme)
            .copied()
            .ok_or(DatabaseError::ThemeNotFound { theme })
    }

    /// Returns the maximum length over all templates of the given theme.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::ThemeNotFound`] if the theme has no recorded
    /// templates.
    pub fn max_length(&self, theme: Theme) -> Result<u32, DatabaseError> {
        self.max_length_by_theme
            .get(&theme)
            .copied()
            .ok_or(DatabaseError::ThemeNotFound { theme })
    }

    /// Number of distinct specifications in the catalog.
    pub fn specification_count(&self) -> usize {
        self.templates_by_spec.len()
    }

    /// Total number of template records across all specifications.
    pub fn template_count(&self) -> usize {
        self.templates_by_spec.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, RoomError};

    fn record(theme: Theme, width: u32, length: u32, locator: &str) -> RoomTemplateRecord {
        RoomTemplateRecord::new(RoomSpecification::new(theme, width, length), locator)
    }

    fn sample_database() -> RoomSpecificationDatabase {
        RoomSpecificationDatabase::build(vec![
            record(Theme::Crypt, 4, 4, "a"),
            record(Theme::Crypt, 6, 4, "b"),
            record(Theme::Hall, 4, 4, "c"),
        ])
        .unwrap()
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let error = RoomSpecificationDatabase::build(Vec::new()).unwrap_err();
        assert_eq!(error, DatabaseError::EmptyCatalog);
        assert_eq!(error.severity(), ErrorSeverity::Fatal);
        assert!(error.severity().is_fatal());
        assert_eq!(error.severity().as_str(), "fatal");
        assert_eq!(error.error_code(), "DATABASE_EMPTY_CATALOG");
    }

    #[test]
    fn catalog_of_three_templates_answers_every_query() {
        let database = sample_database();

        assert_eq!(database.max_width(Theme::Crypt), Ok(6));
        assert_eq!(database.max_length(Theme::Crypt), Ok(4));
        assert_eq!(database.max_width(Theme::Hall), Ok(4));

        assert_eq!(
            database.exists(&RoomSpecification::new(Theme::Crypt, 4, 4)),
            Ok(true)
        );
        assert_eq!(
            database.exists(&RoomSpecification::new(Theme::Crypt, 5, 4)),
            Ok(false)
        );

        let locators: Vec<&str> = database
            .locators_for(&RoomSpecification::new(Theme::Crypt, 4, 4))
            .unwrap()
            .iter()
            .map(TemplateLocator::as_str)
            .collect();
        assert_eq!(locators, ["a"]);

        assert_eq!(database.specification_count(), 3);
        assert_eq!(database.template_count(), 3);
    }

    #[test]
    fn zero_footprint_queries_are_caller_errors() {
        let database = sample_database();

        let zero_width = RoomSpecification::new(Theme::Crypt, 0, 4);
        assert_eq!(
            database.exists(&zero_width),
            Err(DatabaseError::InvalidSpecification {
                specification: zero_width
            })
        );

        let zero_length = RoomSpecification::new(Theme::Crypt, 4, 0);
        assert!(database.exists(&zero_length).is_err());
    }

    #[test]
    fn locators_keep_catalog_discovery_order() {
        let database = RoomSpecificationDatabase::build(vec![
            record(Theme::Crypt, 4, 4, "a"),
            record(Theme::Hall, 4, 4, "c"),
            record(Theme::Crypt, 4, 4, "d"),
        ])
        .unwrap();

        let locators: Vec<&str> = database
            .locators_for(&RoomSpecification::new(Theme::Crypt, 4, 4))
            .unwrap()
            .iter()
            .map(TemplateLocator::as_str)
            .collect();
        assert_eq!(locators, ["a", "d"]);
    }

    #[test]
    fn missing_specification_is_a_precondition_violation() {
        let database = sample_database();
        let absent = RoomSpecification::new(Theme::Hall, 9, 9);

        assert_eq!(
            database.locators_for(&absent),
            Err(DatabaseError::SpecificationNotFound {
                specification: absent
            })
        );
    }

    #[test]
    fn per_theme_maxima_are_tracked_independently() {
        // The widest crypt (6x4) is not the longest (4x7).
        let database = RoomSpecificationDatabase::build(vec![
            record(Theme::Crypt, 4, 4, "a"),
            record(Theme::Crypt, 6, 4, "b"),
            record(Theme::Crypt, 4, 7, "c"),
        ])
        .unwrap();

        assert_eq!(database.max_width(Theme::Crypt), Ok(6));
        assert_eq!(database.max_length(Theme::Crypt), Ok(7));
    }

    #[test]
    fn unknown_theme_has_no_maxima() {
        let database = sample_database();

        assert_eq!(
            database.max_width(Theme::Sewer),
            Err(DatabaseError::ThemeNotFound { theme: Theme::Sewer })
        );
        assert_eq!(
            database.max_length(Theme::Sewer),
            Err(DatabaseError::ThemeNotFound { theme: Theme::Sewer })
        );
    }
}
