use super::{LOG_TARGET, LocationId, define_row, read_table};
use crate::error::KwError;
use camino::Utf8Path;
use compact_str::CompactString;
use std::collections::HashMap;

/// Attribute naming where the declaration of an entity lives.
pub const HEADER_LOCATION_ATTRIBUTE: &str = "header-location";

/// Marker in a `header-location` value flagging a system or external header.
pub const SYSTEM_HEADER_MARKER: &str = "system";

define_row! {
    /// One attribute of a location.
    AttributeRow in attribute {
        pub location: LocationId = 0,
        pub name: CompactString = 1,
        pub value: CompactString = 2,
    }
}

/// All attributes of one location, as index-aligned name and value lists in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRecord {
    names: Vec<CompactString>,
    values: Vec<CompactString>,
}

impl AttributeRecord {
    pub fn push(&mut self, name: CompactString, value: CompactString) {
        self.names.push(name);
        self.values.push(value);
    }

    /// `(name, value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .zip(&self.values)
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Whether the location is declared in a system or external header.
    #[must_use]
    pub fn is_system_header(&self) -> bool {
        self.iter()
            .any(|(name, value)| name == HEADER_LOCATION_ATTRIBUTE && value.contains(SYSTEM_HEADER_MARKER))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct AttributeTable {
    records: HashMap<LocationId, AttributeRecord>,
}

impl AttributeTable {
    pub fn load(tables_dir: &Utf8Path) -> Result<Self, KwError> {
        let mut table = Self::default();
        let rows = read_table(tables_dir, |row: AttributeRow| {
            table.insert(row);
            Ok(())
        })?;

        log::info!(target: LOG_TARGET, "Loaded {rows} attributes for {} locations", table.len());
        Ok(table)
    }

    /// Appends an attribute to its location's record, creating the record on first use.
    pub fn insert(&mut self, row: AttributeRow) {
        self.records.entry(row.location).or_default().push(row.name, row.value);
    }

    #[must_use]
    pub fn get(&self, location: &LocationId) -> Option<&AttributeRecord> {
        self.records.get(location)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<AttributeRow> for AttributeTable {
    fn from_iter<I: IntoIterator<Item = AttributeRow>>(iter: I) -> Self {
        let mut table = Self::default();
        for row in iter {
            table.insert(row);
        }
        table
    }
}
