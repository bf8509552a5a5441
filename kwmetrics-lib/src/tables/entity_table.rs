use super::{LOG_TARGET, LocationId, define_row, read_table};
use crate::error::KwError;
use camino::Utf8Path;
use compact_str::CompactString;
use std::collections::HashMap;

define_row! {
    /// A named code entity (function, class, ...) and the file that owns it.
    ///
    /// Columns 1 and 2 of the entity table carry analyzer bookkeeping that the
    /// report has no use for.
    EntityRow in entity {
        pub location: LocationId = 0,
        pub name: CompactString = 3,
        pub dependency: CompactString = 4,
        pub owner_file: LocationId = 5,
    }
}

#[derive(Debug, Default)]
pub struct EntityTable {
    entities: HashMap<LocationId, EntityRow>,
}

impl EntityTable {
    pub fn load(tables_dir: &Utf8Path) -> Result<Self, KwError> {
        let mut table = Self::default();
        let _ = read_table(tables_dir, |row: EntityRow| {
            table.insert(row);
            Ok(())
        })?;

        log::info!(target: LOG_TARGET, "Loaded {} entities", table.len());
        Ok(table)
    }

    pub fn insert(&mut self, row: EntityRow) {
        let _ = self.entities.insert(row.location.clone(), row);
    }

    #[must_use]
    pub fn get(&self, location: &LocationId) -> Option<&EntityRow> {
        self.entities.get(location)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<EntityRow> for EntityTable {
    fn from_iter<I: IntoIterator<Item = EntityRow>>(iter: I) -> Self {
        let mut table = Self::default();
        for row in iter {
            table.insert(row);
        }
        table
    }
}
