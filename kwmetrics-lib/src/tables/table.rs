use super::LOG_TARGET;
use crate::error::KwError;
use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord, Trim};

/// Field delimiter used by every analyzer table.
pub const TABLE_DELIMITER: u8 = b';';

/// A typed row of one of the analyzer tables.
///
/// Rows are positional: each field is taken from a fixed column index and any
/// trailing columns beyond the highest index are ignored.
pub trait Row: Sized {
    const TABLE_NAME: &'static str;
    const FILE_NAME: &'static str;

    /// Minimum number of fields a line must split into.
    const FIELD_COUNT: usize;

    fn from_record(record: &StringRecord) -> Self;
}

/// Reads every row of a table, handing each one to `visit` in file order.
///
/// Returns the number of rows read. Blank lines are skipped; a line with fewer
/// than [`Row::FIELD_COUNT`] fields aborts the read.
pub fn read_table<R: Row>(tables_dir: &Utf8Path, mut visit: impl FnMut(R) -> Result<(), KwError>) -> Result<u64, KwError> {
    let path = tables_dir.join(R::FILE_NAME);
    log::debug!(target: LOG_TARGET, "Reading {path}");

    let mut reader = ReaderBuilder::new()
        .delimiter(TABLE_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_path(&path)
        .map_err(|source| KwError::Read { table: R::TABLE_NAME, source })?;

    let mut record = StringRecord::new();
    let mut count = 0;
    while reader
        .read_record(&mut record)
        .map_err(|source| KwError::Read { table: R::TABLE_NAME, source })?
    {
        if record.len() == 1 && record.get(0).is_some_and(str::is_empty) {
            continue;
        }

        if record.len() < R::FIELD_COUNT {
            return Err(KwError::MalformedRecord {
                table: R::TABLE_NAME,
                line: record.position().map_or(0, csv::Position::line),
                expected: R::FIELD_COUNT,
                found: record.len(),
            });
        }

        visit(R::from_record(&record))?;
        count += 1;
    }

    Ok(count)
}

/// One past the highest column index, i.e. the number of fields a row needs.
pub const fn field_count(indices: &[usize]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < indices.len() {
        if indices[i] + 1 > count {
            count = indices[i] + 1;
        }
        i += 1;
    }
    count
}

/// Generates a row struct and its [`Row`] implementation from a table name and a
/// list of `field: Type = column` declarations.
///
/// Creates:
/// - `{RowName}` - Row struct with the declared fields
/// - Implementation of `Row`, with `TABLE_NAME` set to the table name and
///   `FILE_NAME` to `{table}.dat`
///
/// Every field type must implement `From<&str>`.
macro_rules! define_row {
    (
        $(#[$meta:meta])*
        $row_name:ident in $table:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $field_type:ty = $index:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $row_name {
            $(
                $(#[$field_meta])*
                pub $field: $field_type,
            )*
        }

        impl super::Row for $row_name {
            const TABLE_NAME: &'static str = stringify!($table);
            const FILE_NAME: &'static str = concat!(stringify!($table), ".dat");
            const FIELD_COUNT: usize = super::field_count(&[$($index),*]);

            fn from_record(record: &csv::StringRecord) -> Self {
                Self {
                    $(
                        $field: <$field_type>::from(record.get($index).unwrap_or_default()),
                    )*
                }
            }
        }
    };
}

pub(crate) use define_row;
