//! Fatal conditions raised while producing a metrics report.
//!
//! Every variant stems from a violation of the input contract (missing tables,
//! malformed rows, dangling identifiers, unusable expressions), so none of them
//! are retried and there is no degraded mode: a report is either produced in full
//! or not at all.

use crate::expr::ExprError;
use crate::tables::LocationId;
use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KwError {
    /// One or more of the required tables is absent from the tables directory.
    #[error("could not find {} in '{tables_dir}'", missing.join(", "))]
    MissingInput {
        tables_dir: Utf8PathBuf,
        missing: Vec<&'static str>,
    },

    /// A requested expression names a symbol that the metric kind table doesn't define.
    #[error("could not find metric reference '{reference}' in the metric kind table")]
    UnknownMetricReference { reference: String },

    /// A table line doesn't split into enough fields.
    #[error("malformed record in table '{table}' at line {line}: expected at least {expected} fields, found {found}")]
    MalformedRecord {
        table: &'static str,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A location carrying metrics can't be tied back to a known file.
    #[error("location '{location}' does not resolve to a known file")]
    UnresolvableOwner { location: LocationId },

    /// A requested expression is not valid arithmetic over metric references.
    #[error("invalid metric expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: ExprError },

    /// A requested expression failed to evaluate for a particular entity.
    #[error("could not evaluate '{expression}' for '{entity}' (location '{location}'): {reason}")]
    Evaluation {
        expression: String,
        entity: String,
        location: LocationId,
        reason: ExprError,
    },

    /// The table file could not be read or decoded.
    #[error("unable to read table '{table}': {source}")]
    Read {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}
