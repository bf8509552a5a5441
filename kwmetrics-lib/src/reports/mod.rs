//! Assembly and rendering of the metrics report.
//!
//! [`build_report`] runs the whole pipeline for one tables directory: load the
//! tables, aggregate the requested expressions per entity, and order the result
//! into a [`ReportTable`]. The table is built completely in memory, so a failing
//! run never leaves a partial report behind. [`generate_csv`] then renders it as
//! `;`-delimited text with a single header line.

mod csv;
mod report_table;

pub(super) const LOG_TARGET: &str = "   reports";

use crate::error::KwError;
use crate::expr::Expression;
use crate::metrics::aggregate;
use crate::tables::TableSet;
use camino::Utf8Path;

pub use csv::generate as generate_csv;
pub use report_table::ReportTable;

/// Loads the tables in `tables_dir` and produces the report for `expressions`.
pub fn build_report(tables_dir: &Utf8Path, expressions: &[Expression]) -> Result<ReportTable, KwError> {
    let tables = TableSet::load(tables_dir, expressions)?;
    let aggregation = aggregate(&tables, expressions)?;
    Ok(ReportTable::assemble(&aggregation, &tables.files, expressions))
}
