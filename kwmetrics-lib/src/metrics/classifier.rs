use super::{EntityKind, LOG_TARGET};
use crate::error::KwError;
use crate::tables::{AttributeTable, EntityTable, FileTable, LocationId};

/// Outcome of classifying a location that carries metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// The location belongs to a system header and must not be reported.
    Excluded,

    /// The location is reported as `kind`, grouped under the file `owner`.
    Retained { kind: EntityKind, owner: &'a LocationId },
}

/// Decides, for any location, which file owns it and whether it is a file, a function, or a class.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    files: &'a FileTable,
    entities: &'a EntityTable,
    attributes: &'a AttributeTable,
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub const fn new(files: &'a FileTable, entities: &'a EntityTable, attributes: &'a AttributeTable) -> Self {
        Self {
            files,
            entities,
            attributes,
        }
    }

    /// Classifies `location`.
    ///
    /// The checks run in a fixed order:
    ///
    /// 1. a `header-location` attribute whose value mentions `system` excludes the location;
    /// 2. a location that is itself a known file is file-level;
    /// 3. an entity with any recorded attributes is a function;
    /// 4. any other entity is a class.
    ///
    /// Attributes are the only signal that separates functions from classes, so an
    /// entity without attributes is always reported as a class.
    pub fn classify(&self, location: &'a LocationId) -> Result<Classification<'a>, KwError> {
        let attributes = self.attributes.get(location);
        if attributes.is_some_and(|record| record.is_system_header()) {
            log::debug!(target: LOG_TARGET, "Skipping location '{location}' from a system header");
            return Ok(Classification::Excluded);
        }

        let owner = self.owner_of(location)?;
        let kind = if owner == location {
            EntityKind::File
        } else if attributes.is_some() {
            EntityKind::Function
        } else {
            EntityKind::Class
        };

        log::debug!(target: LOG_TARGET, "Location '{location}' is a {kind} in file '{owner}'");
        Ok(Classification::Retained { kind, owner })
    }

    /// The file that owns `location`: the location itself when it is a file, else the entity's owner file.
    pub fn owner_of(&self, location: &'a LocationId) -> Result<&'a LocationId, KwError> {
        if self.files.contains(location) {
            return Ok(location);
        }

        match self.entities.get(location) {
            Some(entity) if self.files.contains(&entity.owner_file) => Ok(&entity.owner_file),
            _ => Err(KwError::UnresolvableOwner {
                location: location.clone(),
            }),
        }
    }
}
