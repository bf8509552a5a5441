use super::{LOG_TARGET, LocationId, MetricKindId, MetricKindTable, define_row, read_table};
use crate::error::KwError;
use camino::Utf8Path;
use compact_str::CompactString;
use std::collections::{HashMap, HashSet};

define_row! {
    /// One raw metric value observed for one location.
    MetricRow in metric {
        pub location: LocationId = 0,
        pub kind: MetricKindId = 1,
        pub value: CompactString = 2,
    }
}

/// The raw metric values recorded for a single location, keyed by symbolic metric reference.
#[derive(Debug, Clone)]
pub struct LocationMetrics {
    location: LocationId,
    values: HashMap<CompactString, CompactString>,
}

impl LocationMetrics {
    #[must_use]
    pub const fn location(&self) -> &LocationId {
        &self.location
    }

    /// The raw value recorded for `reference`, if the analyzer produced one.
    #[must_use]
    pub fn value(&self, reference: &str) -> Option<&str> {
        self.values.get(reference).map(CompactString::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Retained raw metric values, grouped by location in first-seen order.
#[derive(Debug, Default)]
pub struct MetricTable {
    locations: Vec<LocationMetrics>,
    index: HashMap<LocationId, usize>,
}

impl MetricTable {
    /// Loads the metric table, keeping only rows whose metric kind is in `wanted`.
    pub fn load(tables_dir: &Utf8Path, kinds: &MetricKindTable, wanted: &HashSet<MetricKindId>) -> Result<Self, KwError> {
        let mut table = Self::default();
        let mut retained = 0_u64;

        let total = read_table(tables_dir, |row: MetricRow| {
            if wanted.contains(&row.kind)
                && let Some(reference) = kinds.reference_of(&row.kind)
            {
                table.insert(row.location, CompactString::from(reference), row.value);
                retained += 1;
            }
            Ok(())
        })?;

        log::info!(
            target: LOG_TARGET,
            "Loaded {retained} of {total} metric values across {} locations",
            table.len()
        );
        Ok(table)
    }

    /// Records a raw value. A repeated (location, reference) pair keeps the latest value.
    pub fn insert(&mut self, location: LocationId, reference: CompactString, value: CompactString) {
        let index = match self.index.get(&location) {
            Some(&index) => index,
            None => {
                let index = self.locations.len();
                let _ = self.index.insert(location.clone(), index);
                self.locations.push(LocationMetrics {
                    location,
                    values: HashMap::new(),
                });
                index
            }
        };

        if let Some(metrics) = self.locations.get_mut(index) {
            let _ = metrics.values.insert(reference, value);
        }
    }

    #[must_use]
    pub fn get(&self, location: &LocationId) -> Option<&LocationMetrics> {
        self.index.get(location).and_then(|&index| self.locations.get(index))
    }

    /// Locations in the order their first metric value appeared.
    pub fn iter(&self) -> impl Iterator<Item = &LocationMetrics> {
        self.locations.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
