use super::{
    AttributeRow, AttributeTable, EntityRow, EntityTable, FileRow, FileTable, LOG_TARGET, MetricKindRow, MetricKindTable, MetricRow,
    MetricTable, Row,
};
use crate::error::KwError;
use crate::expr::{Expression, resolve_references};
use camino::Utf8Path;

/// File names of the tables every run requires.
pub const TABLE_FILES: [&str; 5] = [
    MetricKindRow::FILE_NAME,
    MetricRow::FILE_NAME,
    FileRow::FILE_NAME,
    EntityRow::FILE_NAME,
    AttributeRow::FILE_NAME,
];

/// Fails with [`KwError::MissingInput`] unless all required tables exist in `tables_dir`.
pub fn check_inputs(tables_dir: &Utf8Path) -> Result<(), KwError> {
    let missing: Vec<_> = TABLE_FILES
        .iter()
        .copied()
        .filter(|file_name| !tables_dir.join(file_name).is_file())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(KwError::MissingInput {
            tables_dir: tables_dir.to_path_buf(),
            missing,
        })
    }
}

/// The five analyzer tables, fully loaded and read-only.
#[derive(Debug, Default)]
pub struct TableSet {
    pub metric_kinds: MetricKindTable,
    pub metrics: MetricTable,
    pub files: FileTable,
    pub entities: EntityTable,
    pub attributes: AttributeTable,
}

impl TableSet {
    /// Loads every table needed to evaluate `expressions`.
    ///
    /// Presence of all tables is checked before anything is parsed, and the
    /// expressions are resolved against the metric kinds before the metric table
    /// is read, so an unknown reference fails the load without touching metric values.
    pub fn load(tables_dir: &Utf8Path, expressions: &[Expression]) -> Result<Self, KwError> {
        check_inputs(tables_dir)?;
        log::info!(target: LOG_TARGET, "Loading tables from {tables_dir}");

        let metric_kinds = MetricKindTable::load(tables_dir)?;
        let wanted = resolve_references(expressions, &metric_kinds)?;
        let metrics = MetricTable::load(tables_dir, &metric_kinds, &wanted)?;
        let files = FileTable::load(tables_dir)?;
        let entities = EntityTable::load(tables_dir)?;
        let attributes = AttributeTable::load(tables_dir)?;

        Ok(Self {
            metric_kinds,
            metrics,
            files,
            entities,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_check_inputs_lists_every_missing_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("metric_kind.dat"), "").unwrap();
        fs::write(dir.path().join("file.dat"), "").unwrap();
        let path = Utf8Path::from_path(dir.path()).unwrap();

        let err = check_inputs(path).unwrap_err();
        match &err {
            KwError::MissingInput { missing, .. } => {
                assert_eq!(missing, &["metric.dat", "entity.dat", "attribute.dat"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("metric.dat, entity.dat, attribute.dat"));
    }

    #[test]
    fn test_check_inputs_accepts_complete_directory() {
        let dir = tempfile::tempdir().unwrap();
        for file_name in TABLE_FILES {
            fs::write(dir.path().join(file_name), "").unwrap();
        }
        check_inputs(Utf8Path::from_path(dir.path()).unwrap()).unwrap();
    }

    #[test]
    fn test_unknown_reference_fails_before_metric_table_is_read() {
        let dir = tempfile::tempdir().unwrap();
        for file_name in TABLE_FILES {
            fs::write(dir.path().join(file_name), "").unwrap();
        }
        fs::write(dir.path().join("metric_kind.dat"), "1;CYCLOMATIC;Cyclomatic complexity\n").unwrap();
        // would be malformed if it were read
        fs::write(dir.path().join("metric.dat"), "broken\n").unwrap();

        let expressions = [Expression::parse("CYCLOMATIC+PARAMS").unwrap()];
        let err = TableSet::load(Utf8Path::from_path(dir.path()).unwrap(), &expressions).unwrap_err();
        assert!(matches!(err, KwError::UnknownMetricReference { ref reference } if reference == "PARAMS"));
    }
}
