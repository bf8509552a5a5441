use super::{LOG_TARGET, MetricKindId, define_row, read_table};
use crate::error::KwError;
use camino::Utf8Path;
use compact_str::CompactString;
use std::collections::HashMap;

define_row! {
    /// An analyzer-defined measurable property.
    MetricKindRow in metric_kind {
        pub id: MetricKindId = 0,
        /// Short symbolic name, such as `CYCLOMATIC`.
        pub reference: CompactString = 1,
        pub description: CompactString = 2,
    }
}

/// The metric kind dictionary, addressable by identifier and by symbolic reference.
#[derive(Debug, Default)]
pub struct MetricKindTable {
    kinds: Vec<MetricKindRow>,
    by_id: HashMap<MetricKindId, usize>,
    by_reference: HashMap<CompactString, usize>,
}

impl MetricKindTable {
    pub fn load(tables_dir: &Utf8Path) -> Result<Self, KwError> {
        let mut table = Self::default();
        let _ = read_table(tables_dir, |row: MetricKindRow| {
            table.insert(row);
            Ok(())
        })?;

        log::info!(target: LOG_TARGET, "Loaded {} metric kinds", table.len());
        Ok(table)
    }

    /// Adds a metric kind. A later row with an already known id replaces the earlier one.
    pub fn insert(&mut self, row: MetricKindRow) {
        if let Some(&index) = self.by_id.get(&row.id) {
            if let Some(previous) = self.kinds.get(index)
                && self.by_reference.get(&previous.reference) == Some(&index)
            {
                let _ = self.by_reference.remove(&previous.reference);
            }
            let _ = self.by_reference.insert(row.reference.clone(), index);
            if let Some(slot) = self.kinds.get_mut(index) {
                *slot = row;
            }
            return;
        }

        let index = self.kinds.len();
        let _ = self.by_id.insert(row.id.clone(), index);
        let _ = self.by_reference.insert(row.reference.clone(), index);
        self.kinds.push(row);
    }

    #[must_use]
    pub fn id_of(&self, reference: &str) -> Option<&MetricKindId> {
        self.by_reference
            .get(reference)
            .and_then(|&index| self.kinds.get(index))
            .map(|kind| &kind.id)
    }

    #[must_use]
    pub fn reference_of(&self, id: &MetricKindId) -> Option<&str> {
        self.get(id).map(|kind| kind.reference.as_str())
    }

    #[must_use]
    pub fn get(&self, id: &MetricKindId) -> Option<&MetricKindRow> {
        self.by_id.get(id).and_then(|&index| self.kinds.get(index))
    }

    /// Metric kinds in table order.
    pub fn iter(&self) -> impl Iterator<Item = &MetricKindRow> {
        self.kinds.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl FromIterator<MetricKindRow> for MetricKindTable {
    fn from_iter<I: IntoIterator<Item = MetricKindRow>>(iter: I) -> Self {
        let mut table = Self::default();
        for row in iter {
            table.insert(row);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(id: &str, reference: &str) -> MetricKindRow {
        MetricKindRow {
            id: MetricKindId::from(id),
            reference: CompactString::from(reference),
            description: CompactString::from("description"),
        }
    }

    #[test]
    fn test_lookup_both_ways() {
        let table: MetricKindTable = [kind("1", "CYCLOMATIC"), kind("2", "PARAMS")].into_iter().collect();

        assert_eq!(table.id_of("CYCLOMATIC"), Some(&MetricKindId::from("1")));
        assert_eq!(table.id_of("PARAMS"), Some(&MetricKindId::from("2")));
        assert_eq!(table.reference_of(&MetricKindId::from("2")), Some("PARAMS"));
        assert_eq!(table.id_of("LOC"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_duplicate_id_replaces_previous() {
        let table: MetricKindTable = [kind("1", "OLD"), kind("1", "NEW")].into_iter().collect();

        assert_eq!(table.len(), 1);
        assert_eq!(table.id_of("OLD"), None);
        assert_eq!(table.id_of("NEW"), Some(&MetricKindId::from("1")));
    }

    #[test]
    fn test_iter_preserves_table_order() {
        let table: MetricKindTable = [kind("9", "B"), kind("3", "A")].into_iter().collect();
        let references: Vec<_> = table.iter().map(|k| k.reference.as_str()).collect();
        assert_eq!(references, ["B", "A"]);
    }
}
