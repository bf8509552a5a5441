use super::{LOG_TARGET, LocationId, define_row, read_table};
use crate::error::KwError;
use camino::Utf8Path;
use compact_str::CompactString;
use std::collections::HashMap;

define_row! {
    /// One analyzed source file.
    FileRow in file {
        pub location: LocationId = 0,
        pub path: CompactString = 1,
    }
}

#[derive(Debug, Default)]
pub struct FileTable {
    files: HashMap<LocationId, FileRow>,
}

impl FileTable {
    pub fn load(tables_dir: &Utf8Path) -> Result<Self, KwError> {
        let mut table = Self::default();
        let _ = read_table(tables_dir, |row: FileRow| {
            table.insert(row);
            Ok(())
        })?;

        log::info!(target: LOG_TARGET, "Loaded {} files", table.len());
        Ok(table)
    }

    pub fn insert(&mut self, row: FileRow) {
        let _ = self.files.insert(row.location.clone(), row);
    }

    #[must_use]
    pub fn get(&self, location: &LocationId) -> Option<&FileRow> {
        self.files.get(location)
    }

    /// Whether `location` is the id of a known file.
    #[must_use]
    pub fn contains(&self, location: &LocationId) -> bool {
        self.files.contains_key(location)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<FileRow> for FileTable {
    fn from_iter<I: IntoIterator<Item = FileRow>>(iter: I) -> Self {
        let mut table = Self::default();
        for row in iter {
            table.insert(row);
        }
        table
    }
}
